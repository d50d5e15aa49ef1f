use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct PublishLeaderboardResponse {
    pub quiz_id: i64,
    /// Listeners the payload was handed to. Delivery itself is not acknowledged.
    pub listeners: i32,
}

impl PublishLeaderboardResponse {
    pub fn new(quiz_id: i64, listeners: usize) -> Self {
        Self {
            quiz_id,
            listeners: i32::try_from(listeners).unwrap_or(i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_response_serializes_camel_case() {
        let response = PublishLeaderboardResponse::new(4, 2);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["quizId"], 4);
        assert_eq!(json["listeners"], 2);
    }

    #[test]
    fn test_publish_response_saturates_listener_count() {
        let response = PublishLeaderboardResponse::new(4, usize::MAX);
        assert_eq!(response.listeners, i32::MAX);
    }
}
