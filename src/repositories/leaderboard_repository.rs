use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{
        AnswerKey, Entry, EntryWithParticipant, Participant, Question, Quiz,
        QuizLeaderboardSource,
    },
};

/// Read side of the quiz store used by the leaderboard. Writes belong to the
/// authoring and submission flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// `None` when no quiz has this id.
    async fn find_quiz_with_questions_and_entries(
        &self,
        quiz_id: i64,
    ) -> AppResult<Option<QuizLeaderboardSource>>;
}

pub struct MongoLeaderboardRepository {
    quizzes: Collection<Quiz>,
    questions: Collection<Question>,
    entries: Collection<Entry>,
    users: Collection<Participant>,
}

impl MongoLeaderboardRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quizzes: db.get_collection("quizzes"),
            questions: db.get_collection("questions"),
            entries: db.get_collection("entries"),
            users: db.get_collection("users"),
        }
    }

    /// Non-unique lookup indexes for the reads below. Uniqueness stays with the
    /// writers of these collections.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for leaderboard collections");

        self.quizzes.create_index(id_index()).await?;
        self.questions.create_index(id_index()).await?;
        self.entries.create_index(id_index()).await?;
        self.users.create_index(id_index()).await?;

        self.questions.create_index(quiz_id_index()).await?;
        self.entries.create_index(quiz_id_index()).await?;

        log::info!("Successfully created indexes for leaderboard collections");
        Ok(())
    }

    async fn find_participants(&self, entries: &[Entry]) -> AppResult<HashMap<i64, Participant>> {
        let user_ids: Vec<i64> = entries
            .iter()
            .filter_map(|e| e.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cursor = self.users.find(doc! { "id": { "$in": user_ids } }).await?;
        let participants: Vec<Participant> = cursor.try_collect().await?;

        Ok(participants.into_iter().map(|p| (p.id, p)).collect())
    }
}

fn id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(IndexOptions::builder().name("id".to_string()).build())
        .build()
}

fn quiz_id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "quiz_id": 1 })
        .options(IndexOptions::builder().name("quiz_id".to_string()).build())
        .build()
}

#[async_trait]
impl LeaderboardRepository for MongoLeaderboardRepository {
    async fn find_quiz_with_questions_and_entries(
        &self,
        quiz_id: i64,
    ) -> AppResult<Option<QuizLeaderboardSource>> {
        if self.quizzes.find_one(doc! { "id": quiz_id }).await?.is_none() {
            return Ok(None);
        }

        let questions: Vec<Question> = self
            .questions
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;

        let entries: Vec<Entry> = self
            .entries
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;

        let participants = self.find_participants(&entries).await?;

        let entries = entries
            .into_iter()
            .map(|entry| {
                let participant = entry.user_id.and_then(|id| participants.get(&id).cloned());
                EntryWithParticipant { entry, participant }
            })
            .collect();

        Ok(Some(QuizLeaderboardSource {
            questions: questions.into_iter().map(AnswerKey::from).collect(),
            entries,
        }))
    }
}
