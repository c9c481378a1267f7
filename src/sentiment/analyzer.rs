//! Lexicon-based sentiment scorer.
//!
//! A small heuristic: count exact lexicon hits over the token stream,
//! derive a 0-100 positivity score centered at 50, and pull one evidence
//! sentence for each category. Total over every possible input string;
//! empty and degenerate inputs degrade to neutral fallback values.

use super::lexicon;
use super::{Sentiment, SentimentBreakdown, SentimentResult};

const EXCERPT_LIMIT: usize = 120;

/// Score a piece of free text. Pure and deterministic; never fails.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let input = text.trim();

    let lowered = input.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect();

    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in &tokens {
        if lexicon::is_positive(token) {
            positive += 1;
        }
        if lexicon::is_negative(token) {
            negative += 1;
        }
    }

    let neutral = tokens.len().saturating_sub(positive + negative);
    let total = (positive + neutral + negative).max(1);

    // Score centered at 50, shifted by the relative hit difference.
    let raw = 50.0 + ((positive as f64 - negative as f64) / total as f64) * 50.0;
    let score = raw.round().clamp(0.0, 100.0) as u8;

    let sentiment = if positive > negative && positive >= 1 {
        Sentiment::Positive
    } else if negative > positive && negative >= 1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let best_snippet = sentence_with(input, lexicon::POSITIVE_WORDS)
        .map(str::to_owned)
        .unwrap_or_else(|| head_excerpt(input, "No content"));
    let worst_snippet = sentence_with(input, lexicon::NEGATIVE_WORDS)
        .map(str::to_owned)
        .unwrap_or_else(|| head_excerpt(input, "No content"));
    let neutral_snippet = neutral_sentence(input)
        .map(str::to_owned)
        .unwrap_or_else(|| head_excerpt(input, "No neutral excerpt"));

    SentimentResult {
        sentiment,
        score,
        best_snippet,
        worst_snippet,
        neutral_snippet,
        breakdown: SentimentBreakdown {
            positive,
            neutral,
            negative,
        },
    }
}

/// Split text into sentences. A boundary follows `.`, `!` or `?` when the
/// next character is whitespace; the terminator stays with the preceding
/// sentence and the whitespace run is consumed.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }
        sentences.push(&text[start..boundary]);
        start = text.len();
        while let Some(&(i, w)) = chars.peek() {
            if w.is_whitespace() {
                chars.next();
            } else {
                start = i;
                break;
            }
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// First sentence whose lower-cased form contains any of the given words
/// as a substring. Substring containment on purpose: "badger" matches
/// "bad" here even though the token counter would not count it.
fn sentence_with<'a>(text: &'a str, words: &[&str]) -> Option<&'a str> {
    split_sentences(text).into_iter().find_map(|sentence| {
        let lowered = sentence.to_lowercase();
        if words.iter().any(|w| lowered.contains(w)) {
            let trimmed = sentence.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        } else {
            None
        }
    })
}

/// First sentence containing no substring hit from either lexicon.
fn neutral_sentence(text: &str) -> Option<&str> {
    split_sentences(text).into_iter().find_map(|sentence| {
        let lowered = sentence.to_lowercase();
        let hit = lexicon::POSITIVE_WORDS
            .iter()
            .chain(lexicon::NEGATIVE_WORDS)
            .any(|w| lowered.contains(w));
        if hit {
            None
        } else {
            let trimmed = sentence.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
    })
}

fn head_excerpt(input: &str, fallback: &str) -> String {
    if input.is_empty() {
        fallback.to_string()
    } else {
        input.chars().take(EXCERPT_LIMIT).collect()
    }
}
