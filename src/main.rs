use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quiz_leaderboard_server::{
    app_state::AppState, config::Config, errors::AppError, graphql::create_schema, handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production().map_err(into_io_error)?;
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config).await.map_err(into_io_error)?;
    let schema = create_schema(state.clone());
    let topic_registry = state.topic_registry.clone();

    log::info!("starting HTTP server on {}:{}", host, port);
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    let result = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure_graphql)
            .service(handlers::get_leaderboard)
            .service(handlers::publish_leaderboard)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
    })
    .shutdown_timeout(5)
    .bind((host.as_str(), port))?
    .run()
    .await;

    topic_registry.shutdown();
    result
}

fn into_io_error(err: AppError) -> std::io::Error {
    log::error!("{}", err);
    std::io::Error::other(err)
}
