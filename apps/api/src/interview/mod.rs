// Interview engine: static question bank, question selection, answer scoring
// (TF-IDF similarity + sentiment), aggregation and the downloadable report.

pub mod aggregate;
pub mod evaluation;
pub mod handlers;
pub mod question_bank;
pub mod report;
pub mod selector;
pub mod sentiment;
pub mod similarity;

/// Rounds to two decimal places, the precision every displayed score uses.
///
/// Rounds the exact binary value (ties to even) through its decimal
/// expansion, so `60.005_f64` (stored just below 60.005) becomes `60.0`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
