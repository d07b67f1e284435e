mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use state::AppState;
use store::EmployeeStore;

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            routes::EMPLOYEES,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::EMPLOYEE,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("employee-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        store: EmployeeStore::seeded(),
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(state)).await.context("Server error")?;

    Ok(())
}
