use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::{stream, stream::BoxStream, StreamExt};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{LeaderboardRow, QuizLeaderboardSource, UnrankedRow},
        dto::request::QuizIdInput,
    },
    pubsub::{PubSub, Topic},
    repositories::LeaderboardRepository,
    services::{answers::AnswerSheet, ranking::rank_rows, scoring_service::ScoringService},
};

/// Leaderboards pushed to one subscriber. Dropping it cancels the subscription.
pub type LeaderboardUpdates = BoxStream<'static, Vec<LeaderboardRow>>;

pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
    bus: Option<Arc<dyn PubSub>>,
    snapshot_on_subscribe: bool,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn LeaderboardRepository>, bus: Option<Arc<dyn PubSub>>) -> Self {
        Self {
            repository,
            bus,
            snapshot_on_subscribe: false,
        }
    }

    /// Push the current leaderboard as the first element of every new subscription.
    pub fn with_snapshot_on_subscribe(mut self, enabled: bool) -> Self {
        self.snapshot_on_subscribe = enabled;
        self
    }

    /// Current leaderboard for a quiz, recomputed from stored questions and entries.
    pub async fn assemble(&self, quiz_id: i64) -> AppResult<Vec<LeaderboardRow>> {
        let source = self
            .repository
            .find_quiz_with_questions_and_entries(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        Ok(Self::compute(&source))
    }

    pub fn compute(source: &QuizLeaderboardSource) -> Vec<LeaderboardRow> {
        let rows = source
            .entries
            .iter()
            .map(|item| {
                let answers = AnswerSheet::from_value(&item.entry.answers);
                let card = ScoringService::score(&source.questions, &answers);

                UnrankedRow {
                    user_id: item.participant_id(),
                    name: item.display_name(),
                    score: f64::from(card.correct_count),
                    correct_count: card.correct_count,
                    answered_count: card.answered_count,
                    updated_at: format_timestamp(item.entry.updated_at),
                }
            })
            .collect();

        rank_rows(rows)
    }

    /// Recompute and broadcast a quiz's leaderboard. Called after any write that
    /// changes an entry or an answer key. Returns how many listeners were handed
    /// the update.
    pub async fn publish(&self, quiz_id: i64) -> AppResult<usize> {
        let quiz_id = QuizIdInput::validated(quiz_id)?;
        let bus = self.bus()?;

        let rows = self.assemble(quiz_id).await?;
        let topic = Topic::leaderboard(quiz_id);
        let row_count = rows.len();
        let delivered = bus.publish(&topic, rows)?;

        log::debug!(
            "Published {} leaderboard row(s) on {} to {} listener(s)",
            row_count,
            topic,
            delivered
        );

        Ok(delivered)
    }

    /// Listen for leaderboard broadcasts on a quiz until the returned stream is dropped.
    pub async fn subscribe(&self, quiz_id: i64) -> AppResult<LeaderboardUpdates> {
        let quiz_id = QuizIdInput::validated(quiz_id)?;
        let bus = self.bus()?;

        // registered before the snapshot read so nothing published meanwhile is lost
        let updates = bus.subscribe(&Topic::leaderboard(quiz_id))?;

        if !self.snapshot_on_subscribe {
            return Ok(updates.boxed());
        }

        let snapshot = self.assemble(quiz_id).await?;
        Ok(stream::once(async move { snapshot }).chain(updates).boxed())
    }

    fn bus(&self) -> AppResult<&Arc<dyn PubSub>> {
        self.bus.as_ref().ok_or_else(|| {
            AppError::ConfigurationError("Pub/sub bus is not configured".to_string())
        })
    }
}

/// Millisecond RFC 3339 in UTC with a `Z` suffix, so string order is time order.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
