use super::*;

/// Number of random slides performed per shuffle.
pub const WALK_STEPS: usize = 100;

/// Scrambles a board by walking the empty slot through [`WALK_STEPS`] legal
/// slides, each picked uniformly among the neighbors legal at that step. A
/// walk only ever visits positions reachable by legal slides, so the result
/// stays solvable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomWalkShuffler {
    seed: u64,
}

impl RandomWalkShuffler {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardShuffler for RandomWalkShuffler {
    fn shuffle(self, board: &Board) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut board = *board;

        for _ in 0..WALK_STEPS {
            // every cell of a 4x4 grid has at least two slide neighbors
            let mut candidates = [0 as CellIndex; 4];
            let mut len = 0;
            for neighbor in board.legal_moves() {
                candidates[len] = neighbor;
                len += 1;
            }
            let step = candidates[rng.random_range(0..len)];
            board.swap_with_empty(step);
        }

        log::debug!(
            "shuffled board with seed {}, empty slot at {}",
            self.seed,
            board.empty_index()
        );
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_preserves_the_tile_multiset() {
        let board = RandomWalkShuffler::new(7).shuffle(&Board::solved());

        let mut seen = [false; CELL_COUNT];
        let mut empties = 0;
        for cell in board.cells() {
            match cell.tile() {
                Some(id) => {
                    assert!(!seen[id as usize], "tile {} appears twice", id);
                    seen[id as usize] = true;
                }
                None => empties += 1,
            }
        }
        assert_eq!(empties, 1);
        assert!(seen[1..].iter().all(|&present| present));
        assert_eq!(board[board.empty_index()], Cell::Empty);
    }

    #[test]
    fn shuffle_keeps_every_seed_solvable() {
        for seed in 0..64 {
            let board = RandomWalkShuffler::new(seed).shuffle(&Board::solved());
            assert!(board.is_solvable(), "seed {} produced an unsolvable board", seed);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let first = RandomWalkShuffler::new(99).shuffle(&Board::solved());
        let second = RandomWalkShuffler::new(99).shuffle(&Board::solved());
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_walks_from_the_given_board() {
        let start = RandomWalkShuffler::new(1).shuffle(&Board::solved());
        let rewalked = RandomWalkShuffler::new(2).shuffle(&start);
        assert!(rewalked.is_solvable());
    }
}
