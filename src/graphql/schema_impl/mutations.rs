use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState, graphql::helpers::parse_quiz_id,
    models::dto::response::PublishLeaderboardResponse,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Called by the authoring and submission flows after their write commits.
    async fn publish_leaderboard_updated(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
    ) -> Result<PublishLeaderboardResponse> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_quiz_id(&quiz_id).map_err(|err| err.extend())?;

        let listeners = state
            .leaderboard_service
            .publish(quiz_id)
            .await
            .map_err(|err| err.extend())?;

        Ok(PublishLeaderboardResponse::new(quiz_id, listeners))
    }
}
