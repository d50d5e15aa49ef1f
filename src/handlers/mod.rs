pub mod graphql_handler;
pub mod health_handler;
pub mod leaderboard_handler;

pub use graphql_handler::configure as configure_graphql;
pub use health_handler::{health_check, health_check_ready};
pub use leaderboard_handler::{get_leaderboard, publish_leaderboard};
