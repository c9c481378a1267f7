pub mod config;
pub mod sentiment;
pub mod ui;

pub use sentiment::{analyze_sentiment, Sentiment, SentimentBreakdown, SentimentResult};
