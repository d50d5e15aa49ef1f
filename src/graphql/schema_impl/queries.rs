use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState, graphql::helpers::parse_quiz_id, models::domain::LeaderboardRow,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_leaderboard_for_quiz(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
    ) -> Result<Vec<LeaderboardRow>> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_quiz_id(&quiz_id).map_err(|err| err.extend())?;

        state
            .leaderboard_service
            .assemble(quiz_id)
            .await
            .map_err(|err| err.extend())
    }
}
