use actix_web::{guard, web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};

use crate::graphql::Schema;

pub async fn graphql(schema: web::Data<Schema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Websocket transport for `leaderboardUpdated`. Closing the socket drops the
/// subscription stream, which deregisters the listener.
pub async fn graphql_ws(
    schema: web::Data<Schema>,
    req: HttpRequest,
    payload: web::Payload,
) -> actix_web::Result<HttpResponse> {
    GraphQLSubscription::new(Schema::clone(&*schema)).start(&req, payload)
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            GraphiQLSource::build()
                .endpoint("/graphql")
                .subscription_endpoint("/graphql")
                .finish(),
        )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").guard(guard::Post()).to(graphql))
        .service(
            web::resource("/graphql")
                .guard(guard::Get())
                .guard(guard::Header("upgrade", "websocket"))
                .to(graphql_ws),
        )
        .service(web::resource("/graphiql").guard(guard::Get()).to(graphiql));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        app_state::AppState, config::Config, graphql::create_schema,
        repositories::MockLeaderboardRepository,
    };

    #[actix_web::test]
    async fn test_graphql_post_reports_invalid_quiz_id() {
        let state =
            AppState::from_parts(Arc::new(MockLeaderboardRepository::new()), Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_schema(state)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({
                "query": "{ getLeaderboardForQuiz(quizId: \"nope\") { rank } }"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["extensions"]["code"], "INVALID_ARGUMENT");
    }

    #[actix_web::test]
    async fn test_graphiql_page() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/graphiql").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
