use crate::domain::analytics::{PricePrediction, PricePredictionRequest, PricePredictionResponse};
use crate::engine::PricePredictor;

pub const MARKUP: f64 = 1.05;
const CONFIDENCE: f64 = 0.75;
const FACTORS: [&str; 3] = ["demand", "competition", "location"];

/// Suggests a flat 5% increase on every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatMarkupPredictor;

#[async_trait::async_trait]
impl PricePredictor for FlatMarkupPredictor {
    async fn predict(
        &self,
        req: &PricePredictionRequest,
    ) -> anyhow::Result<PricePredictionResponse> {
        let predictions = req
            .menu_items
            .iter()
            .map(|item| PricePrediction {
                item_id: item.id,
                current_price: item.price,
                suggested_price: item.price * MARKUP,
                confidence: CONFIDENCE,
                factors: FACTORS.iter().map(|f| f.to_string()).collect(),
            })
            .collect();

        Ok(PricePredictionResponse {
            restaurant_id: req.restaurant_id,
            predictions,
        })
    }
}
