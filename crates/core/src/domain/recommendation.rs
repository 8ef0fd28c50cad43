use crate::domain::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: i64,
    #[serde(default, alias = "preferences")]
    pub user_preferences: Option<Map<String, Value>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub time_of_day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub restaurants: Vec<RestaurantRecommendation>,
    pub menu_items: Vec<MenuItemRecommendation>,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecommendation {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// Minutes.
    pub estimated_delivery_time: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecommendation {
    pub id: i64,
    pub name: String,
    pub restaurant_id: i64,
    pub price: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuRecommendationQuery {
    pub restaurant_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecommendationResponse {
    pub restaurant_id: i64,
    pub user_id: i64,
    pub recommendations: Vec<ScoredMenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMenuItem {
    pub item_id: i64,
    pub name: String,
    pub price: f64,
    pub confidence: f64,
    pub reason: String,
}
