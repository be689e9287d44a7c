//! Per-answer feedback tiers and the aggregate performance score.
//!
//! Both use the same cut points (> 75, > 50) but are computed independently, so a
//! single answer's tier can disagree with the overall level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interview::round2;

pub const STRONG_THRESHOLD: f64 = 75.0;
pub const AVERAGE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl FeedbackTier {
    pub fn for_score(similarity: f64) -> Self {
        if similarity > STRONG_THRESHOLD {
            FeedbackTier::Excellent
        } else if similarity > AVERAGE_THRESHOLD {
            FeedbackTier::Good
        } else {
            FeedbackTier::NeedsImprovement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent answer! Strong conceptual clarity.",
            FeedbackTier::Good => "Good answer, but you can improve explanation depth.",
            FeedbackTier::NeedsImprovement => {
                "Answer needs improvement. Try adding more technical details."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    #[serde(rename = "Strong Candidate")]
    Strong,
    #[serde(rename = "Average Candidate")]
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn for_score(final_score: f64) -> Self {
        if final_score > STRONG_THRESHOLD {
            PerformanceLevel::Strong
        } else if final_score > AVERAGE_THRESHOLD {
            PerformanceLevel::Average
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Strong => "Strong Candidate",
            PerformanceLevel::Average => "Average Candidate",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    pub score: f64,
    pub level: PerformanceLevel,
}

/// Mean of the answered questions' similarity scores, rounded to two decimals
/// for display. The level is decided on the unrounded mean.
/// `None` when nothing was answered.
pub fn final_result(scores: &[f64]) -> Option<FinalResult> {
    if scores.is_empty() {
        return None;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let score = round2(mean);
    Some(FinalResult {
        score,
        level: PerformanceLevel::for_score(mean),
    })
}
