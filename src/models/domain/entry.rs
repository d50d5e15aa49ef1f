use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Participant;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    pub id: i64,
    pub quiz_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw answers payload as written by the submission flow. Shape is not trusted.
    #[serde(default)]
    pub answers: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// An entry joined with the registered participant that submitted it, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryWithParticipant {
    pub entry: Entry,
    pub participant: Option<Participant>,
}

impl EntryWithParticipant {
    /// Entry name, then participant name, then a placeholder built from the entry id.
    pub fn display_name(&self) -> String {
        non_blank(self.entry.name.as_deref())
            .or_else(|| non_blank(self.participant.as_ref().and_then(|p| p.name.as_deref())))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {}", self.entry.id))
    }

    /// Id of the joined participant. `None` when the user row is missing, even if
    /// the entry still carries a `user_id`.
    pub fn participant_id(&self) -> Option<i64> {
        self.participant.as_ref().map(|p| p.id)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: i64, name: Option<&str>, user_id: Option<i64>) -> Entry {
        Entry {
            id,
            quiz_id: 1,
            user_id,
            name: name.map(str::to_string),
            answers: json!({}),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_prefers_trimmed_entry_name() {
        let row = EntryWithParticipant {
            entry: entry(1, Some("  Ada  "), Some(9)),
            participant: Some(Participant::new(9, Some("Ada Lovelace"))),
        };
        assert_eq!(row.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_participant() {
        let row = EntryWithParticipant {
            entry: entry(1, Some("   "), Some(9)),
            participant: Some(Participant::new(9, Some(" Grace "))),
        };
        assert_eq!(row.display_name(), "Grace");
    }

    #[test]
    fn display_name_falls_back_to_placeholder() {
        let anonymous = EntryWithParticipant {
            entry: entry(42, None, None),
            participant: None,
        };
        assert_eq!(anonymous.display_name(), "Player 42");

        let unnamed_user = EntryWithParticipant {
            entry: entry(43, Some(""), Some(5)),
            participant: Some(Participant::new(5, Some("  "))),
        };
        assert_eq!(unnamed_user.display_name(), "Player 43");
    }

    #[test]
    fn participant_id_is_null_for_anonymous_entries() {
        let anonymous = EntryWithParticipant {
            entry: entry(1, Some("Guest"), None),
            participant: None,
        };
        assert_eq!(anonymous.participant_id(), None);

        let registered = EntryWithParticipant {
            entry: entry(2, None, Some(5)),
            participant: Some(Participant::new(5, None)),
        };
        assert_eq!(registered.participant_id(), Some(5));
    }

    #[test]
    fn participant_id_is_null_when_user_row_is_missing() {
        let orphaned = EntryWithParticipant {
            entry: entry(3, Some("Left"), Some(11)),
            participant: None,
        };
        assert_eq!(orphaned.participant_id(), None);
        assert_eq!(orphaned.display_name(), "Left");
    }

    #[test]
    fn entry_without_answers_defaults_to_null() {
        let parsed: Entry = serde_json::from_value(json!({
            "id": 1,
            "quiz_id": 2,
            "updated_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert!(parsed.answers.is_null());
        assert_eq!(parsed.user_id, None);
    }
}
