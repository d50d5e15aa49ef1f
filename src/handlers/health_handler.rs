use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let mongodb = match &state.db {
        Some(db) => {
            if db.health_check().await.is_ok() {
                "ok"
            } else {
                "error"
            }
        }
        None => "not_configured",
    };
    let pubsub = if state.topic_registry.is_open() {
        "ok"
    } else {
        "closed"
    };
    let ready = mongodb != "error" && pubsub == "ok";

    let response = serde_json::json!({
        "status": if ready { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": mongodb,
            "pubsub": pubsub,
            "topics": state.topic_registry.topic_count()
        }
    });

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::{config::Config, repositories::MockLeaderboardRepository};

    fn state() -> AppState {
        AppState::from_parts(Arc::new(MockLeaderboardRepository::new()), Config::test_config())
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_ready_without_database_handle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["dependencies"]["mongodb"], "not_configured");
        assert_eq!(body["dependencies"]["pubsub"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_after_registry_shutdown() {
        let state = state();
        state.topic_registry.shutdown();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
