use std::cmp::Ordering;

use crate::models::domain::{LeaderboardRow, UnrankedRow};

/// Leaderboard order: higher score first, then the earlier `updated_at`,
/// then name.
pub fn compare_rows(a: &UnrankedRow, b: &UnrankedRow) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.updated_at.cmp(&b.updated_at))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sorts rows and assigns positional ranks `1..=N`. Exact ties keep their
/// input order and still get distinct ranks.
pub fn rank_rows(mut rows: Vec<UnrankedRow>) -> Vec<LeaderboardRow> {
    rows.sort_by(compare_rows);

    rows.into_iter()
        .zip(1..)
        .map(|(row, rank)| LeaderboardRow::from_unranked(row, rank))
        .collect()
}
