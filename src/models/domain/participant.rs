use serde::{Deserialize, Serialize};

/// A registered user as far as the leaderboard cares.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Participant {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Participant {
    pub fn new(id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            name: name.map(str::to_string),
        }
    }
}
