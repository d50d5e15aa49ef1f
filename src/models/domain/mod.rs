pub mod entry;
pub mod leaderboard;
pub mod participant;
pub mod question;
pub mod quiz;
pub use entry::{Entry, EntryWithParticipant};
pub use leaderboard::{LeaderboardRow, UnrankedRow};
pub use participant::Participant;
pub use question::{AnswerKey, Question, QuestionType};
pub use quiz::{Quiz, QuizLeaderboardSource};
