use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>, // only meaningful for multiple choice
    #[serde(default)]
    pub correct_answer: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

/// The part of a question that scoring looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKey {
    pub question_id: i64,
    pub correct_answer: Option<String>,
}

impl AnswerKey {
    pub fn new(question_id: i64, correct_answer: Option<&str>) -> Self {
        Self {
            question_id,
            correct_answer: correct_answer.map(str::to_string),
        }
    }

    /// Submitted answers are keyed by the question id rendered as a string.
    pub fn answer_key(&self) -> String {
        self.question_id.to_string()
    }
}

impl From<Question> for AnswerKey {
    fn from(question: Question) -> Self {
        Self {
            question_id: question.id,
            correct_answer: question.correct_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_uses_screaming_snake_case() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"MULTIPLE_CHOICE\"");

        let parsed: QuestionType = serde_json::from_str("\"TRUE_FALSE\"").unwrap();
        assert_eq!(parsed, QuestionType::TrueFalse);
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        assert!(serde_json::from_str::<QuestionType>("\"ESSAY\"").is_err());
    }

    #[test]
    fn question_without_correct_answer_deserializes() {
        let question: Question = serde_json::from_value(serde_json::json!({
            "id": 7,
            "quiz_id": 1,
            "text": "Capital of France?",
            "question_type": "SHORT_ANSWER"
        }))
        .unwrap();

        assert!(question.options.is_empty());
        assert_eq!(question.correct_answer, None);
    }

    #[test]
    fn answer_key_keeps_only_scoring_fields() {
        let question = Question {
            id: 3,
            quiz_id: 1,
            text: "Pick one".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec!["optionA".to_string(), "optionB".to_string()],
            correct_answer: Some("optionB".to_string()),
        };

        let key = AnswerKey::from(question);
        assert_eq!(key, AnswerKey::new(3, Some("optionB")));
        assert_eq!(key.answer_key(), "3");
    }
}
