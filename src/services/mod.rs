pub mod answers;
pub mod leaderboard_service;
pub mod ranking;
pub mod scoring_service;
