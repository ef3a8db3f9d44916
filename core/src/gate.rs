use chrono::NaiveDate;

/// Once-per-calendar-day limiter for the manual reshuffle action.
///
/// The stored fields only take effect when the recorded date matches the
/// caller-supplied "today"; a stale date counts as not yet consumed. Starting
/// a brand-new game is a different action and never goes through the gate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffleGate {
    consumed: bool,
    date: Option<NaiveDate>,
}

impl ShuffleGate {
    pub const fn new() -> Self {
        Self {
            consumed: false,
            date: None,
        }
    }

    /// Rebuilds the gate from persisted parts, verbatim. Staleness is decided
    /// at consume time, not at restore time.
    pub const fn from_parts(consumed: bool, date: Option<NaiveDate>) -> Self {
        Self { consumed, date }
    }

    pub const fn consumed(&self) -> bool {
        self.consumed
    }

    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Whether the reshuffle for `today` has already been used.
    pub fn is_consumed(&self, today: NaiveDate) -> bool {
        self.consumed && self.date == Some(today)
    }

    /// Claims today's reshuffle. Returns `false`, leaving the gate untouched,
    /// when it was already claimed today.
    pub fn try_consume(&mut self, today: NaiveDate) -> bool {
        if self.is_consumed(today) {
            return false;
        }
        self.consumed = true;
        self.date = Some(today);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(ordinal: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, ordinal).unwrap()
    }

    #[test]
    fn second_consume_on_the_same_day_is_rejected() {
        let mut gate = ShuffleGate::new();

        assert!(gate.try_consume(day(1)));
        assert!(gate.is_consumed(day(1)));
        assert!(!gate.try_consume(day(1)));
        assert_eq!(gate.date(), Some(day(1)));
    }

    #[test]
    fn a_new_day_reopens_the_gate() {
        let mut gate = ShuffleGate::new();

        assert!(gate.try_consume(day(1)));
        assert!(!gate.is_consumed(day(2)));
        assert!(gate.try_consume(day(2)));
        assert_eq!(gate.date(), Some(day(2)));
    }

    #[test]
    fn restored_stale_date_counts_as_unconsumed() {
        let gate = ShuffleGate::from_parts(true, Some(day(1)));
        assert!(!gate.is_consumed(day(2)));
        assert!(gate.is_consumed(day(1)));
    }

    #[test]
    fn consumed_flag_without_a_date_never_blocks() {
        let mut gate = ShuffleGate::from_parts(true, None);
        assert!(!gate.is_consumed(day(1)));
        assert!(gate.try_consume(day(1)));
    }
}
