use async_graphql::{Context, ErrorExtensions, Result, Subscription, ID};
use futures::Stream;

use crate::{
    app_state::AppState, graphql::helpers::parse_quiz_id, models::domain::LeaderboardRow,
};

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// One leaderboard per broadcast on the quiz until the client disconnects.
    async fn leaderboard_updated(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
    ) -> Result<impl Stream<Item = Vec<LeaderboardRow>>> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_quiz_id(&quiz_id).map_err(|err| err.extend())?;

        state
            .leaderboard_service
            .subscribe(quiz_id)
            .await
            .map_err(|err| err.extend())
    }
}
