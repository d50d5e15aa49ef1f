pub mod leaderboard_repository;

pub use leaderboard_repository::{LeaderboardRepository, MongoLeaderboardRepository};

#[cfg(test)]
pub use leaderboard_repository::MockLeaderboardRepository;
