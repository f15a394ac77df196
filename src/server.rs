use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{types::*, weather, AppState};

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route("/health", get(health_check))
        .route("/api/weather", post(weather_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "weather-search",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn weather_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<WeatherResponse>, Response> {
    if request.city.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Missing required parameter: city".to_string(),
            }),
        )
            .into_response());
    }

    info!("Processing weather request: {} ({:?})", request.city, request.unit);

    match weather::lookup_weather(&state, &request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Weather lookup failed for {}: {}", request.city, e);
            Err(e.into_response())
        }
    }
}
