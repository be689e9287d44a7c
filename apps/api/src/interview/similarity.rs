//! Answer similarity — TF-IDF cosine over a two-document corpus.
//!
//! The vector space is rebuilt for every (answer, reference) pair: vocabulary is
//! the union of both token sets, idf is smoothed (`ln((1 + n) / (1 + df)) + 1`,
//! n = 2), tf is the raw count, and both vectors are L2-normalized before the
//! dot product. Tokens are runs of two or more word characters, lower-cased.
//!
//! `AppState` holds an `Arc<dyn AnswerScorer>`; `TfIdfScorer` is the default.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::errors::AppError;
use crate::interview::round2;

/// Scores a candidate answer against its reference on a 0–100 scale.
#[async_trait]
pub trait AnswerScorer: Send + Sync {
    async fn score(&self, answer: &str, reference: &str) -> Result<f64, AppError>;

    /// Backend label surfaced in responses.
    fn backend(&self) -> &'static str;
}

/// Lexical TF-IDF scorer. Pure, deterministic, no shared state.
pub struct TfIdfScorer;

#[async_trait]
impl AnswerScorer for TfIdfScorer {
    async fn score(&self, answer: &str, reference: &str) -> Result<f64, AppError> {
        Ok(similarity(answer, reference))
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Similarity percentage in [0, 100], rounded to two decimals.
pub fn similarity(answer: &str, reference: &str) -> f64 {
    round2((cosine_tfidf(answer, reference) * 100.0).clamp(0.0, 100.0))
}

/// Raw cosine similarity in [0, 1]. 0.0 when either side has no tokens.
pub fn cosine_tfidf(a: &str, b: &str) -> f64 {
    let docs = [term_counts(a), term_counts(b)];
    if docs.iter().any(HashMap::is_empty) {
        return 0.0;
    }

    let vocabulary: BTreeSet<&str> = docs
        .iter()
        .flat_map(|doc| doc.keys().map(String::as_str))
        .collect();

    let n = docs.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|doc| doc.contains_key(*term)).count() as f64;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            let raw: Vec<f64> = vocabulary
                .iter()
                .zip(&idf)
                .map(|(term, w)| doc.get(*term).copied().unwrap_or(0) as f64 * w)
                .collect();
            l2_normalize(raw)
        })
        .collect();

    vectors[0]
        .iter()
        .zip(&vectors[1])
        .map(|(x, y)| x * y)
        .sum::<f64>()
        .clamp(0.0, 1.0)
}

/// Lower-cased tokens: maximal runs of alphanumerics/underscore, at least two chars long.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
    v
}
