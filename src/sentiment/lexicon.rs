//! Fixed sentiment lexicons, mixed English/Spanish vocabulary.
//!
//! Word lists are matched two ways by the analyzer: exact token matches
//! for the breakdown counts, and substring containment when hunting for
//! evidence sentences. Both modes read the same tables.

use std::collections::HashSet;
use std::sync::LazyLock;

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "bueno",
    "great",
    "genial",
    "excellent",
    "excelente",
    "happy",
    "feliz",
    "love",
    "amo",
    "awesome",
    "impresionante",
    "fantastic",
    "fantastico",
    "nice",
    "agradable",
    "amazing",
    "increible",
    "positive",
    "positivo",
    "like",
    "gustar",
    "wonderful",
    "extraordinario",
    "best",
    "mejor",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "malo",
    "terrible",
    "lamentable",
    "awful",
    "espantoso",
    "hate",
    "odio",
    "sad",
    "triste",
    "angry",
    "enojado",
    "horrible",
    "worst",
    "peor",
    "negative",
    "negativo",
    "dislike",
    "disgusto",
    "bug",
    "error",
    "problem",
    "problema",
];

static POSITIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

static NEGATIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Exact-match lookup against the positive lexicon. Expects a
/// lower-cased token.
pub fn is_positive(token: &str) -> bool {
    POSITIVE_SET.contains(token)
}

/// Exact-match lookup against the negative lexicon. Expects a
/// lower-cased token.
pub fn is_negative(token: &str) -> bool {
    NEGATIVE_SET.contains(token)
}
