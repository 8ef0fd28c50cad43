use crate::engine::forecast::DEFAULT_FORECAST_HOURS;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct PricePredictionRequest {
    pub restaurant_id: i64,
    pub menu_items: Vec<PricedMenuItem>,
    /// Any JSON object; only the recommendation request restricts it to coordinates.
    pub location: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricedMenuItem {
    pub id: i64,
    pub price: f64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePredictionResponse {
    pub restaurant_id: i64,
    pub predictions: Vec<PricePrediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePrediction {
    pub item_id: i64,
    pub current_price: f64,
    pub suggested_price: f64,
    pub confidence: f64,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemandForecastQuery {
    pub restaurant_id: i64,
    #[serde(default = "default_hours_ahead")]
    pub hours_ahead: i64,
}

fn default_hours_ahead() -> i64 {
    i64::from(DEFAULT_FORECAST_HOURS)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecastResponse {
    pub restaurant_id: i64,
    pub forecast_hours: u32,
    pub predicted_orders: Vec<HourlyOrders>,
    pub peak_hours: Vec<u32>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyOrders {
    pub hour: u32,
    pub orders: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentRequest {
    pub reviews: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub results: Vec<SentimentResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// First 50 characters of the review, always followed by `...`.
    pub text: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub confidence: f64,
}
