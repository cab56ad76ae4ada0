use axum::{
    Json, Router,
    routing::{delete, get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use std::sync::Arc;

use api_types::health::Health;
use engine::Engine;

use crate::{balances, expenses, groups, members, settlements};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        message: "HappyShare API is running".to_string(),
    })
}

pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/groups", get(groups::list).post(groups::group_new))
        .route(
            "/api/groups/{group_id}",
            get(groups::get)
                .put(groups::update)
                .delete(groups::delete),
        )
        .route("/api/groups/{group_id}/balances", get(balances::get))
        .route(
            "/api/groups/{group_id}/members",
            get(members::list).post(members::member_new),
        )
        .route(
            "/api/groups/{group_id}/members/{member_id}",
            put(members::rename).delete(members::remove),
        )
        .route(
            "/api/groups/{group_id}/expenses",
            get(expenses::list).post(expenses::expense_new),
        )
        .route(
            "/api/groups/{group_id}/expenses/{expense_id}",
            put(expenses::update).delete(expenses::delete),
        )
        .route(
            "/api/groups/{group_id}/settlements",
            get(settlements::list).post(settlements::settlement_new),
        )
        .route(
            "/api/groups/{group_id}/settlements/suggested",
            get(settlements::suggested),
        )
        .route(
            "/api/groups/{group_id}/settlements/{settlement_id}",
            delete(settlements::delete),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
