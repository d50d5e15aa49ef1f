use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_MONGO_CONN_STRING: &str = "mongodb://localhost:27017";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub app_env: String,
    /// When false no pub/sub bus is wired and publish/subscribe fail with a configuration error.
    pub pubsub_enabled: bool,
    /// Boards held per topic for listeners that fall behind. Older boards go first.
    pub listener_buffer: usize,
    pub snapshot_on_subscribe: bool,
    /// Create lookup indexes on the quiz collections at startup. Off unless asked for,
    /// the collections belong to the authoring side.
    pub ensure_indexes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .map(SecretString::from)
                .unwrap_or(defaults.mongo_conn_string),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or(defaults.mongo_db_name),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            app_env: env::var("APP_ENV").unwrap_or(defaults.app_env),
            pubsub_enabled: parse_flag(
                env::var("LEADERBOARD_PUBSUB_ENABLED").ok(),
                defaults.pubsub_enabled,
            ),
            listener_buffer: env::var("LEADERBOARD_LISTENER_BUFFER")
                .ok()
                .and_then(|b| b.parse::<usize>().ok())
                .map(|b| b.max(1))
                .unwrap_or(defaults.listener_buffer),
            snapshot_on_subscribe: parse_flag(
                env::var("LEADERBOARD_SNAPSHOT_ON_SUBSCRIBE").ok(),
                defaults.snapshot_on_subscribe,
            ),
            ensure_indexes: parse_flag(
                env::var("LEADERBOARD_ENSURE_INDEXES").ok(),
                defaults.ensure_indexes,
            ),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects settings that only make sense on a developer machine.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let conn = self.mongo_conn_string.expose_secret();

        if conn == DEFAULT_MONGO_CONN_STRING {
            return Err(AppError::ConfigurationError(
                "MONGO_CONN_STRING is using the default localhost value".to_string(),
            ));
        }

        if !self.pubsub_enabled {
            return Err(AppError::ConfigurationError(
                "LEADERBOARD_PUBSUB_ENABLED must be true in production, live leaderboards depend on it"
                    .to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from(DEFAULT_MONGO_CONN_STRING.to_string()),
            mongo_db_name: "quiz-leaderboard-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            app_env: "test".to_string(),
            pubsub_enabled: true,
            listener_buffer: 16,
            snapshot_on_subscribe: false,
            ensure_indexes: false,
        }
    }
}

impl Default for Config {
    /// Local development settings, also what `from_env` falls back to.
    fn default() -> Self {
        Self {
            mongo_conn_string: SecretString::from(DEFAULT_MONGO_CONN_STRING.to_string()),
            mongo_db_name: "quiz-leaderboard-local".to_string(),
            web_server_host: "localhost".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            app_env: "development".to_string(),
            pubsub_enabled: true,
            listener_buffer: 64,
            snapshot_on_subscribe: false,
            ensure_indexes: false,
        }
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}
