use crate::error::{ApiError, FieldError, Source};
use crate::extract::{ValidJson, ValidQuery};
use crate::AppState;
use axum::{extract::State, Json};
use eats_ai_core::domain::analytics::{
    DemandForecastQuery, DemandForecastResponse, PricePredictionRequest,
    PricePredictionResponse, SentimentRequest, SentimentResponse,
};
use eats_ai_core::domain::chat::{ChatMessage, ChatResponse};
use eats_ai_core::domain::recommendation::{
    MenuRecommendationQuery, MenuRecommendationResponse, RecommendationRequest,
    RecommendationResponse,
};
use eats_ai_core::engine::forecast::MAX_FORECAST_HOURS;
use serde::Serialize;

const SERVICE_NAME: &str = "ai-service";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const ENDPOINTS: [&str; 7] = [
    "/health",
    "/recommendations/restaurants",
    "/recommendations/menu-items",
    "/chat/support",
    "/analytics/price-prediction",
    "/analytics/demand-forecast",
    "/analytics/sentiment",
];

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    mode: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceBanner {
    message: &'static str,
    version: &'static str,
    testing: bool,
    endpoints: [&'static str; 7],
}

pub async fn root(State(state): State<AppState>) -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "AI service for restaurant recommendations and analytics",
        version: VERSION,
        testing: state.testing,
        endpoints: ENDPOINTS,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        mode: state.mode(),
        version: VERSION,
    })
}

pub async fn recommend_restaurants(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let engine = state.engine()?;
    let out = engine
        .recommender
        .recommend_restaurants(&req)
        .await
        .map_err(|e| state.fault("recommend_restaurants", e))?;
    Ok(Json(out))
}

pub async fn recommend_menu_items(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<MenuRecommendationQuery>,
) -> Result<Json<MenuRecommendationResponse>, ApiError> {
    let engine = state.engine()?;
    let out = engine
        .recommender
        .recommend_menu_items(&query)
        .await
        .map_err(|e| state.fault("recommend_menu_items", e))?;
    Ok(Json(out))
}

pub async fn chat_support(
    State(state): State<AppState>,
    ValidJson(msg): ValidJson<ChatMessage>,
) -> Result<Json<ChatResponse>, ApiError> {
    let engine = state.engine()?;
    let out = engine
        .intents
        .respond(&msg)
        .await
        .map_err(|e| state.fault("chat_support", e))?;
    Ok(Json(out))
}

pub async fn price_prediction(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<PricePredictionRequest>,
) -> Result<Json<PricePredictionResponse>, ApiError> {
    let engine = state.engine()?;
    let out = engine
        .pricing
        .predict(&req)
        .await
        .map_err(|e| state.fault("price_prediction", e))?;
    Ok(Json(out))
}

pub async fn demand_forecast(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DemandForecastQuery>,
) -> Result<Json<DemandForecastResponse>, ApiError> {
    let hours_ahead = u32::try_from(query.hours_ahead)
        .ok()
        .filter(|h| *h <= MAX_FORECAST_HOURS)
        .ok_or_else(|| {
            FieldError::out_of_range(
                Source::Query,
                "hours_ahead",
                format!("hours_ahead must be between 0 and {MAX_FORECAST_HOURS}"),
            )
        })?;

    let engine = state.engine()?;
    let out = engine
        .forecaster
        .forecast(query.restaurant_id, hours_ahead)
        .await
        .map_err(|e| state.fault("demand_forecast", e))?;
    Ok(Json(out))
}

pub async fn sentiment(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let engine = state.engine()?;
    let results = engine
        .sentiment
        .score(&req.reviews)
        .await
        .map_err(|e| state.fault("sentiment", e))?;
    tracing::debug!(reviews = req.reviews.len(), "scored reviews");
    Ok(Json(SentimentResponse { results }))
}
