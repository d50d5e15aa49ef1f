use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A scored entry before ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct UnrankedRow {
    pub user_id: Option<i64>,
    pub name: String,
    pub score: f64,
    pub correct_count: i32,
    pub answered_count: i32,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub user_id: Option<i64>,
    pub name: String,
    pub score: f64,
    pub correct_count: i32,
    pub answered_count: i32,
    pub rank: i32,
    pub updated_at: String,
}

impl LeaderboardRow {
    pub fn from_unranked(row: UnrankedRow, rank: i32) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            score: row.score,
            correct_count: row.correct_count,
            answered_count: row.answered_count,
            rank,
            updated_at: row.updated_at,
        }
    }
}
