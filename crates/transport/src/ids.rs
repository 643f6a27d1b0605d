use chrono::Utc;

/// Timestamp-derived id sequence.
///
/// Ids are the creation time in milliseconds, bumped so that every id is
/// strictly greater than the previous one. Not thread-safe on its own: keep it
/// behind the same lock as the collection it numbers.
#[derive(Debug, Default, Clone)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a record created now.
    pub fn next(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id for a record created at `now_ms`.
    pub fn next_at(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_clock_when_it_moves_forward() {
        let mut ids = TimestampIds::new();
        assert_eq!(ids.next_at(1_000), 1_000);
        assert_eq!(ids.next_at(2_000), 2_000);
    }

    #[test]
    fn same_millisecond_still_yields_distinct_ids() {
        let mut ids = TimestampIds::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(5_000);
        let c = ids.next_at(4_000);
        assert_eq!((a, b, c), (5_000, 5_001, 5_002));
    }

    #[test]
    fn wall_clock_ids_are_positive_and_increasing() {
        let mut ids = TimestampIds::new();
        let a = ids.next();
        let b = ids.next();
        assert!(a > 0);
        assert!(b > a);
    }
}
