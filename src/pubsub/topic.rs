use std::fmt;

pub const LEADERBOARD_TOPIC_PREFIX: &str = "LEADERBOARD_UPDATED:";

/// Broadcast channel name. One per quiz leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    pub fn leaderboard(quiz_id: i64) -> Self {
        Topic(format!("{LEADERBOARD_TOPIC_PREFIX}{quiz_id}"))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_topic_is_derived_from_quiz_id() {
        assert_eq!(Topic::leaderboard(12).as_str(), "LEADERBOARD_UPDATED:12");
        assert_eq!(Topic::leaderboard(12), Topic::leaderboard(12));
        assert_ne!(Topic::leaderboard(12), Topic::leaderboard(13));
    }
}
