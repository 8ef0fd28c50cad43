//! Placeholder scoring engines.
//!
//! Every capability is a narrow async trait so a learned model can replace the
//! heuristic implementation without touching the HTTP layer. The set of
//! implementations is chosen once at startup (see [`Engine::from_settings`]).

pub mod forecast;
pub mod intent;
pub mod pricing;
pub mod recommend;
pub mod sentiment;

use crate::config::{BackendKind, Settings};
use crate::domain::analytics::{
    DemandForecastResponse, PricePredictionRequest, PricePredictionResponse, SentimentResult,
};
use crate::domain::chat::{ChatMessage, ChatResponse};
use crate::domain::recommendation::{
    MenuRecommendationQuery, MenuRecommendationResponse, RecommendationRequest,
    RecommendationResponse,
};
use std::sync::Arc;

#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend_restaurants(
        &self,
        req: &RecommendationRequest,
    ) -> anyhow::Result<RecommendationResponse>;

    async fn recommend_menu_items(
        &self,
        query: &MenuRecommendationQuery,
    ) -> anyhow::Result<MenuRecommendationResponse>;
}

#[async_trait::async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn respond(&self, msg: &ChatMessage) -> anyhow::Result<ChatResponse>;
}

#[async_trait::async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(&self, req: &PricePredictionRequest)
        -> anyhow::Result<PricePredictionResponse>;
}

#[async_trait::async_trait]
pub trait DemandForecaster: Send + Sync {
    async fn forecast(
        &self,
        restaurant_id: i64,
        hours_ahead: u32,
    ) -> anyhow::Result<DemandForecastResponse>;
}

#[async_trait::async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, reviews: &[String]) -> anyhow::Result<Vec<SentimentResult>>;
}

/// One implementation per capability, immutable for the process lifetime.
#[derive(Clone)]
pub struct Engine {
    pub recommender: Arc<dyn Recommender>,
    pub intents: Arc<dyn IntentClassifier>,
    pub pricing: Arc<dyn PricePredictor>,
    pub forecaster: Arc<dyn DemandForecaster>,
    pub sentiment: Arc<dyn SentimentScorer>,
}

impl Engine {
    pub fn heuristic() -> Self {
        Self {
            recommender: Arc::new(recommend::StaticCatalogRecommender),
            intents: Arc::new(intent::KeywordIntentClassifier),
            pricing: Arc::new(pricing::FlatMarkupPredictor),
            forecaster: Arc::new(forecast::CyclicDemandForecaster),
            sentiment: Arc::new(sentiment::KeywordSentimentScorer),
        }
    }

    /// Returns `None` when the backend is disabled; callers answer 503 then.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        match settings.ai_backend {
            BackendKind::Heuristic => {
                tracing::info!(backend = "heuristic", "ai engine initialized");
                Some(Self::heuristic())
            }
            BackendKind::Disabled => {
                tracing::warn!("AI_BACKEND=disabled; ai routes will answer 503");
                None
            }
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}
