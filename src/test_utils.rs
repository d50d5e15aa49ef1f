#[cfg(test)]
pub mod fixtures {
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    use crate::models::domain::{
        AnswerKey, Entry, EntryWithParticipant, Participant, QuizLeaderboardSource,
    };

    pub fn at(timestamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(timestamp)
            .expect("fixture timestamp should be RFC 3339")
            .with_timezone(&Utc)
    }

    /// The two-question quiz used across leaderboard tests.
    pub fn two_question_key() -> Vec<AnswerKey> {
        vec![
            AnswerKey::new(1, Some("optionA")),
            AnswerKey::new(2, Some("optionC")),
        ]
    }

    /// Anonymous entry with a display name.
    pub fn entry(id: i64, name: &str, answers: Value, updated_at: &str) -> EntryWithParticipant {
        EntryWithParticipant {
            entry: Entry {
                id,
                quiz_id: 1,
                user_id: None,
                name: Some(name.to_string()),
                answers,
                updated_at: at(updated_at),
            },
            participant: None,
        }
    }

    /// Entry submitted by a registered participant without its own name.
    pub fn user_entry(
        id: i64,
        user_id: i64,
        user_name: &str,
        answers: Value,
        updated_at: &str,
    ) -> EntryWithParticipant {
        EntryWithParticipant {
            entry: Entry {
                id,
                quiz_id: 1,
                user_id: Some(user_id),
                name: None,
                answers,
                updated_at: at(updated_at),
            },
            participant: Some(Participant::new(user_id, Some(user_name))),
        }
    }

    pub fn source(
        questions: Vec<AnswerKey>,
        entries: Vec<EntryWithParticipant>,
    ) -> QuizLeaderboardSource {
        QuizLeaderboardSource { questions, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use serde_json::json;

    #[test]
    fn test_fixtures_entry() {
        let e = entry(3, "Ada", json!({ "1": "a" }), "2024-05-01T10:00:00Z");
        assert_eq!(e.entry.id, 3);
        assert_eq!(e.display_name(), "Ada");
        assert!(e.participant.is_none());
    }

    #[test]
    fn test_fixtures_user_entry() {
        let e = user_entry(4, 9, "Grace", json!({}), "2024-05-01T10:00:00Z");
        assert_eq!(e.participant_id(), Some(9));
        assert_eq!(e.display_name(), "Grace");
    }
}
