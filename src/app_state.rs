use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    pubsub::{PubSub, TopicRegistry},
    repositories::{LeaderboardRepository, MongoLeaderboardRepository},
    services::leaderboard_service::LeaderboardService,
};

#[derive(Clone)]
pub struct AppState {
    pub leaderboard_service: Arc<LeaderboardService>,
    pub topic_registry: TopicRegistry,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let repository = Arc::new(MongoLeaderboardRepository::new(&db));
        if config.ensure_indexes {
            repository.ensure_indexes().await?;
        }

        let mut state = Self::from_parts(repository, config);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the service graph around an arbitrary repository. No database
    /// handle is attached, so readiness reports the store as unknown.
    pub fn from_parts(repository: Arc<dyn LeaderboardRepository>, config: Config) -> Self {
        let topic_registry = TopicRegistry::new(config.listener_buffer);

        let bus: Option<Arc<dyn PubSub>> = if config.pubsub_enabled {
            Some(Arc::new(topic_registry.clone()))
        } else {
            log::warn!("Leaderboard pub/sub is disabled, publish and subscribe will fail");
            None
        };

        let leaderboard_service = Arc::new(
            LeaderboardService::new(repository, bus)
                .with_snapshot_on_subscribe(config.snapshot_on_subscribe),
        );

        Self {
            leaderboard_service,
            topic_registry,
            db: None,
            config: Arc::new(config),
        }
    }
}
