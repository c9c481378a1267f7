pub mod analyzer;
pub mod lexicon;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use analyzer::analyze_sentiment;

/// Overall classification of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

/// Raw token counts underlying the score. All fields are >= 0 and sum to
/// the token count of the analyzed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Result of one scoring call. Constructed atomically, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Positivity index in [0, 100]; 50 is the neutral midpoint.
    pub score: u8,
    #[serde(rename = "bestSnippet")]
    pub best_snippet: String,
    #[serde(rename = "worstSnippet")]
    pub worst_snippet: String,
    #[serde(rename = "neutralSnippet")]
    pub neutral_snippet: String,
    pub breakdown: SentimentBreakdown,
}

#[derive(Debug, Clone)]
pub enum AnalysisData {
    Result(SentimentResult),
    Error(String),
}

/// Seam for scoring engines. The shipped implementation is local and
/// infallible; the trait leaves room for a network-backed engine.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentResult>;
}

/// Lexicon-based scorer running in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

#[async_trait]
impl Analyzer for LocalAnalyzer {
    async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        Ok(analyze_sentiment(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_analyzer_never_fails() {
        let analyzer = LocalAnalyzer;
        assert!(analyzer.analyze("").await.is_ok());
        assert!(analyzer.analyze("good bad neutral").await.is_ok());
    }

    #[test]
    fn test_result_json_field_names() {
        let result = analyze_sentiment("good");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "POSITIVE");
        assert!(json.get("bestSnippet").is_some());
        assert!(json.get("worstSnippet").is_some());
        assert!(json.get("neutralSnippet").is_some());
        assert_eq!(json["breakdown"]["positive"], 1);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = SentimentBreakdown {
            positive: 2,
            neutral: 5,
            negative: 1,
        };
        assert_eq!(breakdown.total(), 8);
    }
}
