use serde::{Deserialize, Serialize};

use crate::models::domain::{AnswerKey, EntryWithParticipant};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Everything the leaderboard needs from one quiz: its answer key and every entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizLeaderboardSource {
    pub questions: Vec<AnswerKey>,
    pub entries: Vec<EntryWithParticipant>,
}
