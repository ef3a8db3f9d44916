use chrono::NaiveDate;
use clap::Args;
use serde::{Deserialize, Serialize};
use suraido_core as puzzle;
use yew::prelude::*;

use crate::celebrate;
use crate::settings::SettingsView;
use crate::utils::*;

impl StorageKey for puzzle::SavedGame {
    const KEY: &'static str = "suraido:game";
}

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<puzzle::SlideOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: puzzle::SlideOutcome| outcome.has_update())
    }
}

/// One play-through plus the once-per-day reshuffle gate. Completion is
/// reported through [`GameSession::take_celebration`] as an explicit edge so
/// the confetti fires exactly once per completion, never on re-renders and
/// never again for a game that was already complete when restored.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    engine: puzzle::SlideEngine,
    gate: puzzle::ShuffleGate,
    celebrated: bool,
}

impl GameSession {
    /// Fresh game: a 100-step walk away from the solved position.
    fn fresh(seed: u64, gate: puzzle::ShuffleGate) -> Self {
        let mut session = Self {
            engine: puzzle::SlideEngine::new(puzzle::Board::solved()),
            gate,
            celebrated: false,
        };
        session.install(seed, puzzle::Board::solved());
        session
    }

    /// Restores a persisted game, or `None` when the snapshot does not
    /// validate. The caller falls back to [`GameSession::fresh`].
    fn from_snapshot(saved: puzzle::SavedGame) -> Option<Self> {
        match saved.restore() {
            Ok((engine, gate)) => Some(Self {
                engine,
                gate,
                celebrated: engine.is_completed(),
            }),
            Err(err) => {
                log::warn!("discarding saved game: {}", err);
                None
            }
        }
    }

    fn install(&mut self, seed: u64, start: puzzle::Board) {
        use puzzle::BoardShuffler;

        let board = puzzle::RandomWalkShuffler::new(seed).shuffle(&start);
        self.engine = puzzle::SlideEngine::new(board);
        self.engine.evaluate_completion();
        self.celebrated = false;
    }

    fn slide(&mut self, index: puzzle::CellIndex) -> bool {
        self.engine.slide(index).has_update()
    }

    /// Manual mid-game reshuffle, walking on from the current board. Gated to
    /// once per calendar day; a no-op while completed (the action button is
    /// "play again" then) or when today's reshuffle is spent.
    fn reshuffle(&mut self, seed: u64, today: NaiveDate) -> bool {
        if self.engine.is_completed() {
            return false;
        }
        if !self.gate.try_consume(today) {
            log::debug!("reshuffle already used on {}", today);
            return false;
        }
        let start = *self.engine.board();
        self.install(seed, start);
        true
    }

    /// Brand-new game from the solved position. Not a reshuffle: the gate is
    /// neither consulted nor consumed.
    fn new_game(&mut self, seed: u64) -> bool {
        self.install(seed, puzzle::Board::solved());
        true
    }

    /// Reports the completion edge once, then keeps returning `false`.
    fn take_celebration(&mut self) -> bool {
        if self.engine.is_completed() && !self.celebrated {
            self.celebrated = true;
            true
        } else {
            false
        }
    }

    fn snapshot(&self) -> puzzle::SavedGame {
        puzzle::SavedGame::capture(&self.engine, &self.gate)
    }

    fn is_completed(&self) -> bool {
        self.engine.is_completed()
    }

    fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    fn cell_at(&self, index: puzzle::CellIndex) -> puzzle::Cell {
        self.engine.cell_at(index)
    }

    fn reshuffle_spent(&self, today: NaiveDate) -> bool {
        self.gate.is_consumed(today)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    TileClick(puzzle::CellIndex),
    Reshuffle,
    NewGame,
    ToggleSettings,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: puzzle::CellIndex,
    cell: puzzle::Cell,
    #[prop_or_default]
    completed: bool,
    callback: Callback<puzzle::CellIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        cell,
        completed,
        callback,
    } = props.clone();

    let mut class = classes!("cell");
    if cell.is_empty() {
        class.push("empty");
    }
    if completed {
        class.push("completed");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>
            { cell.tile().map(|id| id.to_string()).unwrap_or_default() }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    seed: u64,
    settings_open: bool,
}

impl GameView {
    /// Fires the pending celebration edge, then persists a snapshot. Ran
    /// after every update cycle, so every accepted move and every
    /// shuffle/new-game action reaches local storage.
    fn after_mutation(&mut self) {
        if self.session.take_celebration() {
            log::debug!("completion reached, firing celebration");
            celebrate::fire();
        }
        self.session.snapshot().local_save();
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let saved: Option<puzzle::SavedGame> = LocalOrDefault::local_or_default();
        let session = saved
            .and_then(GameSession::from_snapshot)
            .unwrap_or_else(|| GameSession::fresh(seed, puzzle::ShuffleGate::new()));

        let mut view = Self {
            session,
            seed,
            settings_open: false,
        };
        view.after_mutation();
        view
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            TileClick(index) => {
                log::debug!("slide cell: {}", index);
                self.session.slide(index)
            }
            Reshuffle => {
                self.seed = js_random_seed();
                self.session.reshuffle(self.seed, local_today())
            }
            NewGame => {
                self.seed = js_random_seed();
                self.session.new_game(self.seed)
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
        };

        self.after_mutation();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;
        use suraido_core::GRID_SIDE;

        let completed = self.session.is_completed();
        let move_counter = format_for_counter(self.session.move_count());
        let action = if completed { NewGame } else { Reshuffle };
        let action_label = if completed { "Play again" } else { "Shuffle" };
        let action_disabled = !completed && self.session.reshuffle_spent(local_today());

        let cb_action = ctx.link().callback(move |e: MouseEvent| {
            e.stop_propagation();
            action
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_tile = ctx.link().callback(Msg::TileClick);

        html! {
            <div class="suraido">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{move_counter}</aside>
                    <span>
                        <button disabled={action_disabled} onclick={cb_action}>
                            {action_label}
                        </button>
                    </span>
                </nav>
                <table class={classes!(completed.then_some("completed"))}>
                    {
                        for (0..GRID_SIDE).map(|row| html! {
                            <tr>
                                {
                                    for (0..GRID_SIDE).map(|col| {
                                        let index = row * GRID_SIDE + col;
                                        let cell = self.session.cell_at(index);
                                        let callback = cb_tile.clone();
                                        html! {
                                            <TileView {index} {cell} {completed} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if completed {
                    <div class="congrats">
                        <h2>{"Congratulations!"}</h2>
                        <p>{format!("Solved in {} moves.", self.session.move_count())}</p>
                    </div>
                }
                <SettingsView
                    open={self.settings_open}
                    on_close={ctx.link().callback(|_| ToggleSettings)}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle::{Board, Cell, SavedGame, ShuffleGate, SlideEngine};

    fn day(ordinal: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, ordinal).unwrap()
    }

    /// Session one correct slide away from completion: empty at 11, tile 12
    /// waiting at 15.
    fn one_move_session() -> GameSession {
        let mut cells = *Board::solved().cells();
        cells.swap(11, 15);
        GameSession {
            engine: SlideEngine::new(Board::from_cells(cells).unwrap()),
            gate: ShuffleGate::new(),
            celebrated: false,
        }
    }

    #[test]
    fn winning_slide_celebrates_exactly_once() {
        let mut session = one_move_session();

        assert!(!session.take_celebration());
        assert!(session.slide(15));
        assert!(session.is_completed());
        assert!(session.take_celebration());
        assert!(!session.take_celebration());
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn no_moves_accepted_once_completed() {
        let mut session = one_move_session();
        assert!(session.slide(15));

        let before = session.snapshot();
        assert!(!session.slide(14));
        assert!(!session.slide(11));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn second_reshuffle_on_the_same_day_is_a_noop() {
        let mut session = one_move_session();

        assert!(session.reshuffle(5, day(1)));
        let before = session.snapshot();

        assert!(!session.reshuffle(6, day(1)));
        assert_eq!(session.snapshot(), before);
        assert!(session.reshuffle_spent(day(1)));
    }

    #[test]
    fn reshuffle_resets_the_move_counter() {
        let mut session = one_move_session();
        assert!(session.slide(10));
        assert_eq!(session.move_count(), 1);

        assert!(session.reshuffle(5, day(1)));
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn reshuffle_reopens_on_the_next_day() {
        let mut session = one_move_session();

        assert!(session.reshuffle(5, day(1)));
        assert!(!session.reshuffle(6, day(1)));
        assert!(session.reshuffle(7, day(2)));
    }

    #[test]
    fn new_game_ignores_the_gate_and_starts_playing() {
        let mut session = one_move_session();
        assert!(session.reshuffle(5, day(1)));

        assert!(session.new_game(9));
        assert_eq!(session.move_count(), 0);
        // the gate survives a new game: today's manual reshuffle stays spent
        assert!(session.reshuffle_spent(day(1)));
    }

    #[test]
    fn completed_game_reshuffle_is_rejected() {
        let mut session = one_move_session();
        assert!(session.slide(15));

        assert!(!session.reshuffle(5, day(1)));
        assert!(!session.reshuffle_spent(day(1)));
    }

    #[test]
    fn restored_completed_game_does_not_celebrate_again() {
        let mut session = one_move_session();
        assert!(session.slide(15));
        assert!(session.take_celebration());

        let mut restored = GameSession::from_snapshot(session.snapshot()).unwrap();
        assert!(restored.is_completed());
        assert!(!restored.take_celebration());
    }

    #[test]
    fn restored_game_resumes_mid_play() {
        let mut session = one_move_session();
        assert!(session.slide(10));

        let mut restored = GameSession::from_snapshot(session.snapshot()).unwrap();
        assert_eq!(restored.move_count(), 1);
        assert!(!restored.is_completed());
        // play continues where it left off
        assert!(restored.slide(11));
    }

    #[test]
    fn malformed_snapshot_is_discarded() {
        let mut saved = SavedGame::capture(
            &SlideEngine::new(Board::solved()),
            &ShuffleGate::new(),
        );
        saved.tiles[0] = Some(2);
        assert!(GameSession::from_snapshot(saved).is_none());
    }

    #[test]
    fn fresh_session_is_scrambled_and_ready() {
        let session = GameSession::fresh(42, ShuffleGate::new());

        assert_eq!(session.move_count(), 0);
        assert_eq!(session.is_completed(), session.engine.board().is_solved());
        assert_eq!(
            session
                .engine
                .board()
                .cells()
                .iter()
                .filter(|cell| cell.is_empty())
                .count(),
            1
        );
        assert_eq!(session.cell_at(session.engine.board().empty_index()), Cell::Empty);
    }

    #[test]
    fn storage_key_uses_the_namespaced_game_key() {
        assert_eq!(<SavedGame as StorageKey>::KEY, "suraido:game");
    }
}
