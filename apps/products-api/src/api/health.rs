//! Root and readiness endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Routes mounted at the server root: the plain readiness text at `/` and
/// the MongoDB readiness probe at `/ready`
pub fn root_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Plain readiness acknowledgment at the root path
async fn root() -> &'static str {
    "Server is ready"
}

/// Readiness check - verifies MongoDB connection
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    Json(ReadyResponse {
        status: if mongodb_healthy {
            "ready"
        } else {
            "unhealthy"
        }
        .to_string(),
        mongodb: mongodb_healthy,
    })
}
