pub mod error;
pub mod extract;
pub mod routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use eats_ai_core::config::{self, Settings};
use eats_ai_core::engine::Engine;
use error::ApiError;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone)]
pub struct AppState {
    engine: Option<Arc<Engine>>,
    testing: bool,
}

impl AppState {
    pub fn new(engine: Option<Engine>, testing: bool) -> Self {
        Self {
            engine: engine.map(Arc::new),
            testing,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Engine::from_settings(settings), settings.testing)
    }

    pub fn mode(&self) -> &'static str {
        config::mode_name(self.testing)
    }

    fn engine(&self) -> Result<&Engine, ApiError> {
        self.engine.as_deref().ok_or(ApiError::Unavailable)
    }

    /// Reports an engine failure and turns it into a 500.
    fn fault(&self, operation: &'static str, err: anyhow::Error) -> ApiError {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(operation, error = %err, "engine call failed");
        ApiError::Internal {
            detail: self.testing.then(|| format!("{err:#}")),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let testing = state.testing;

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route(
            "/recommendations/restaurants",
            post(routes::recommend_restaurants),
        )
        .route(
            "/recommendations/menu-items",
            post(routes::recommend_menu_items),
        )
        .route("/chat/support", post(routes::chat_support))
        .route("/analytics/price-prediction", post(routes::price_prediction))
        .route("/analytics/demand-forecast", get(routes::demand_forecast))
        .route("/analytics/sentiment", post(routes::sentiment))
        .with_state(state)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| panic_response(panic, testing),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, testing: bool) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    tracing::error!(panic = %message, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(error::internal_body(testing.then_some(message))),
    )
        .into_response()
}
