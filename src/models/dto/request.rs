use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;

/// A quiz id that publish and subscribe accept: a positive integer.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct QuizIdInput {
    #[validate(range(min = 1, message = "quizId must be a positive integer"))]
    pub quiz_id: i64,
}

impl QuizIdInput {
    pub fn validated(quiz_id: i64) -> AppResult<i64> {
        let input = QuizIdInput { quiz_id };
        input.validate()?;
        Ok(input.quiz_id)
    }
}
