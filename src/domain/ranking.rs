//! Activity ranking of per-board count records.
//!
//! Records are ordered by a composite, all-descending key:
//!
//! 1. post count
//! 2. unique poster count
//! 3. new thread count
//! 4. board id (lexicographic)
//!
//! The board id makes the order total for distinct boards, so identical
//! inputs always produce the same ranking.

use std::cmp::Ordering;

use crate::domain::entities::RawCountRecord;

/// Compares two records so that the more active board sorts first.
pub fn compare_activity(a: &RawCountRecord, b: &RawCountRecord) -> Ordering {
    b.post_count
        .cmp(&a.post_count)
        .then_with(|| b.unique_poster_count.cmp(&a.unique_poster_count))
        .then_with(|| b.new_thread_count.cmp(&a.new_thread_count))
        .then_with(|| b.board_id.cmp(&a.board_id))
}

/// Sorts records from most to least active.
///
/// The sort is stable, so true duplicates keep their input order.
pub fn rank(mut records: Vec<RawCountRecord>) -> Vec<RawCountRecord> {
    records.sort_by(compare_activity);
    records
}
