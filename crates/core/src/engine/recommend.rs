use crate::domain::recommendation::{
    MenuItemRecommendation, MenuRecommendationQuery, MenuRecommendationResponse,
    RecommendationRequest, RecommendationResponse, RestaurantRecommendation, ScoredMenuItem,
};
use crate::engine::Recommender;

const RECOMMENDATION_CONFIDENCE: f64 = 0.85;

/// Returns the same literal catalog for every user; preferences, location and
/// time of day are accepted but not used yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogRecommender;

#[async_trait::async_trait]
impl Recommender for StaticCatalogRecommender {
    async fn recommend_restaurants(
        &self,
        req: &RecommendationRequest,
    ) -> anyhow::Result<RecommendationResponse> {
        tracing::debug!(
            user_id = req.user_id,
            time_of_day = req.time_of_day.as_deref(),
            "recommending restaurants"
        );
        Ok(RecommendationResponse {
            restaurants: restaurant_catalog(),
            menu_items: vec![MenuItemRecommendation {
                id: 101,
                name: "Margherita Pizza".to_string(),
                restaurant_id: 1,
                price: 15.99,
                reason: "Popular with users who share your tastes".to_string(),
            }],
            confidence_score: RECOMMENDATION_CONFIDENCE,
        })
    }

    async fn recommend_menu_items(
        &self,
        query: &MenuRecommendationQuery,
    ) -> anyhow::Result<MenuRecommendationResponse> {
        Ok(MenuRecommendationResponse {
            restaurant_id: query.restaurant_id,
            user_id: query.user_id,
            recommendations: menu_catalog(query.restaurant_id),
        })
    }
}

fn restaurant_catalog() -> Vec<RestaurantRecommendation> {
    vec![
        RestaurantRecommendation {
            id: 1,
            name: "Mario's Pizzeria".to_string(),
            cuisine: "Italian".to_string(),
            rating: 4.5,
            estimated_delivery_time: 25,
            reason: "Matches your preference for Italian food".to_string(),
        },
        RestaurantRecommendation {
            id: 2,
            name: "Sakura Sushi".to_string(),
            cuisine: "Japanese".to_string(),
            rating: 4.7,
            estimated_delivery_time: 35,
            reason: "Highly rated in your area".to_string(),
        },
    ]
}

fn menu_catalog(restaurant_id: i64) -> Vec<ScoredMenuItem> {
    let item = |item_id: i64, name: &str, price: f64, confidence: f64, reason: &str| {
        ScoredMenuItem {
            item_id,
            name: name.to_string(),
            price,
            confidence,
            reason: reason.to_string(),
        }
    };

    match restaurant_id {
        1 => vec![
            item(101, "Margherita Pizza", 15.99, 0.92, "Most ordered dish at this restaurant"),
            item(102, "Pasta Carbonara", 12.50, 0.87, "Frequently paired with your past orders"),
        ],
        2 => vec![item(201, "Salmon Nigiri", 9.75, 0.9, "Chef's recommendation")],
        _ => Vec::new(),
    }
}
