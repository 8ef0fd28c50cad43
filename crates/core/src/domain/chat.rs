use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    OrderStatus,
    DeliveryInquiry,
    RefundRequest,
    GeneralInquiry,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::OrderStatus => "order_status",
            Intent::DeliveryInquiry => "delivery_inquiry",
            Intent::RefundRequest => "refund_request",
            Intent::GeneralInquiry => "general_inquiry",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub intent: Intent,
    pub confidence: f64,
}
