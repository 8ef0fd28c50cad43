use crate::domain::analytics::{Sentiment, SentimentResult};
use crate::engine::SentimentScorer;

const POSITIVE_WORDS: [&str; 5] = ["good", "great", "excellent", "amazing", "love"];
const NEGATIVE_WORDS: [&str; 5] = ["bad", "terrible", "awful", "hate", "worst"];

const PREVIEW_CHARS: usize = 50;
const CONFIDENCE: f64 = 0.8;

/// Keyword-count heuristic. Counts are raw, case-insensitive substring
/// occurrences, so "badly" counts as "bad".
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentimentScorer;

fn count_occurrences(text: &str, words: &[&str]) -> usize {
    words.iter().map(|w| text.matches(w).count()).sum()
}

pub fn score_review(review: &str) -> (Sentiment, f64) {
    let text = review.to_lowercase();
    let positive = count_occurrences(&text, &POSITIVE_WORDS);
    let negative = count_occurrences(&text, &NEGATIVE_WORDS);

    let (sentiment, raw) = if positive > negative {
        (Sentiment::Positive, 0.7 + 0.1 * positive as f64)
    } else if negative > positive {
        (Sentiment::Negative, 0.3 - 0.1 * negative as f64)
    } else {
        (Sentiment::Neutral, 0.5)
    };

    (sentiment, raw.clamp(0.0, 1.0))
}

fn preview(review: &str) -> String {
    let mut out: String = review.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

#[async_trait::async_trait]
impl SentimentScorer for KeywordSentimentScorer {
    async fn score(&self, reviews: &[String]) -> anyhow::Result<Vec<SentimentResult>> {
        Ok(reviews
            .iter()
            .map(|review| {
                let (sentiment, score) = score_review(review);
                SentimentResult {
                    text: preview(review),
                    sentiment,
                    score,
                    confidence: CONFIDENCE,
                }
            })
            .collect())
    }
}
