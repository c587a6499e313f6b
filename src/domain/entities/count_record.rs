//! Per-board count record normalized from either count-file format.

/// Activity counters for one board on one day.
///
/// Both on-disk formats normalize into this shape. The legacy text format
/// only carries `post_count`, so `unique_poster_count` and
/// `new_thread_count` stay at zero for records read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCountRecord {
    pub board_id: String,
    pub post_count: u64,
    pub unique_poster_count: u64,
    pub new_thread_count: u64,
}

impl RawCountRecord {
    /// Creates a record from a legacy `board<TAB>count` line.
    pub fn posts_only(board_id: impl Into<String>, post_count: u64) -> Self {
        Self {
            board_id: board_id.into(),
            post_count,
            unique_poster_count: 0,
            new_thread_count: 0,
        }
    }

    /// Creates a record carrying every counter.
    pub fn new(
        board_id: impl Into<String>,
        post_count: u64,
        unique_poster_count: u64,
        new_thread_count: u64,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            post_count,
            unique_poster_count,
            new_thread_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_only_zeroes_json_counters() {
        let record = RawCountRecord::posts_only("news", 42);

        assert_eq!(record.board_id, "news");
        assert_eq!(record.post_count, 42);
        assert_eq!(record.unique_poster_count, 0);
        assert_eq!(record.new_thread_count, 0);
    }

    #[test]
    fn test_new_keeps_all_counters() {
        let record = RawCountRecord::new("livejupiter", 10, 4, 2);

        assert_eq!(record, RawCountRecord::new("livejupiter", 10, 4, 2));
        assert_ne!(record, RawCountRecord::posts_only("livejupiter", 10));
    }
}
