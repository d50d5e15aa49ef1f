use crate::{
    models::domain::AnswerKey,
    services::answers::{normalize_answer, AnswerSheet},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub correct_count: i32,
    pub answered_count: i32,
}

pub struct ScoringService;

impl ScoringService {
    /// Count answered and correct questions for one entry.
    ///
    /// A question is answered when its submitted value is non-blank. It is
    /// correct when the normalized submitted value is non-empty and equals the
    /// normalized answer key; a missing answer key never matches.
    pub fn score(questions: &[AnswerKey], answers: &AnswerSheet) -> ScoreCard {
        let mut card = ScoreCard::default();

        for question in questions {
            let submitted = answers.get(&question.answer_key());
            let normalized = normalize_answer(submitted);

            if normalized.is_empty() {
                continue;
            }
            card.answered_count += 1;

            if normalized == normalize_answer(question.correct_answer.as_deref()) {
                card.correct_count += 1;
            }
        }

        card
    }
}
