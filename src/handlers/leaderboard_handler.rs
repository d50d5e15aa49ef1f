use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, graphql::helpers::parse_quiz_id,
    models::dto::response::PublishLeaderboardResponse,
};

#[get("/api/quizzes/{quiz_id}/leaderboard")]
pub async fn get_leaderboard(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = parse_quiz_id(&quiz_id)?;
    let rows = state.leaderboard_service.assemble(quiz_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Trigger for collaborators that write entries or answer keys over REST.
#[post("/api/quizzes/{quiz_id}/leaderboard/publish")]
pub async fn publish_leaderboard(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = parse_quiz_id(&quiz_id)?;
    let listeners = state.leaderboard_service.publish(quiz_id).await?;
    Ok(HttpResponse::Accepted().json(PublishLeaderboardResponse::new(quiz_id, listeners)))
}
