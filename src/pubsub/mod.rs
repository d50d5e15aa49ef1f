//! In-process publish/subscribe for leaderboard updates.
//!
//! A [`TopicRegistry`] maps each [`Topic`] to the set of live listeners. It
//! starts empty, is owned by the application state, and is drained by
//! [`TopicRegistry::shutdown`] when the server stops. Listeners are removed the
//! moment their [`LeaderboardStream`] is dropped.

pub mod registry;
pub mod topic;

pub use registry::{LeaderboardStream, TopicRegistry};
pub use topic::Topic;

use crate::{errors::AppResult, models::domain::LeaderboardRow};

/// The broadcast bus the leaderboard publisher and gateway talk to.
pub trait PubSub: Send + Sync {
    /// Hands `payload` to every listener of `topic` and returns how many took it.
    /// Never waits on listeners.
    fn publish(&self, topic: &Topic, payload: Vec<LeaderboardRow>) -> AppResult<usize>;

    fn subscribe(&self, topic: &Topic) -> AppResult<LeaderboardStream>;
}
