use crate::errors::{AppError, AppResult};

/// Parse a quiz id given as a GraphQL `ID` or a path segment. Integral numbers in
/// decimal or exponent form (`"1.0"`, `"1e3"`) are accepted.
pub fn parse_quiz_id(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| integral(raw.parse::<f64>().ok()?))
        .ok_or_else(|| AppError::InvalidArgument("Invalid quizId".to_string()))
}

fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
