use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::core::compute_award_intervals;
use crate::domain::model::AwardIntervals;
use crate::domain::ports::MovieStore;
use crate::utils::error::{AppError, Result};

type SharedStore = Arc<dyn MovieStore>;

pub enum ApiError {
    Internal(AppError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(award_intervals_handler))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

async fn award_intervals_handler(
    State(store): State<SharedStore>,
) -> std::result::Result<Json<AwardIntervals>, ApiError> {
    let movies = store.get_all().await.map_err(ApiError::Internal)?;
    tracing::debug!("Computing award intervals over {} movies", movies.len());

    Ok(Json(compute_award_intervals(&movies)))
}

pub async fn run_server(addr: SocketAddr, store: SharedStore) -> Result<()> {
    let app = router(store);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
