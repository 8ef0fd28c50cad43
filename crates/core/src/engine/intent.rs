use crate::domain::chat::{ChatMessage, ChatResponse, Intent};
use crate::engine::IntentClassifier;

/// Substring rules checked in order; the first match wins. Matching is raw
/// substring search, so "cancel" also fires inside "cancellation".
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIntentClassifier;

pub fn classify(message: &str) -> (Intent, f64) {
    let text = message.to_lowercase();
    if text.contains("order") && text.contains("status") {
        (Intent::OrderStatus, 0.9)
    } else if text.contains("delivery") && text.contains("time") {
        (Intent::DeliveryInquiry, 0.85)
    } else if text.contains("refund") || text.contains("cancel") {
        (Intent::RefundRequest, 0.88)
    } else {
        (Intent::GeneralInquiry, 0.6)
    }
}

fn canned_reply(intent: Intent) -> &'static str {
    match intent {
        Intent::OrderStatus => {
            "I can help you check your order status. Please share your order number."
        }
        Intent::DeliveryInquiry => {
            "Delivery usually takes 25-45 minutes depending on your location and the restaurant's preparation time."
        }
        Intent::RefundRequest => {
            "I understand you'd like a refund or to cancel your order. I'll connect you with our support team to process the request."
        }
        Intent::GeneralInquiry => "Thanks for reaching out! How can I help you today?",
    }
}

#[async_trait::async_trait]
impl IntentClassifier for KeywordIntentClassifier {
    async fn respond(&self, msg: &ChatMessage) -> anyhow::Result<ChatResponse> {
        let (intent, confidence) = classify(&msg.message);
        tracing::debug!(intent = intent.as_str(), confidence, "classified chat message");
        Ok(ChatResponse {
            response: canned_reply(intent).to_string(),
            intent,
            confidence,
        })
    }
}
