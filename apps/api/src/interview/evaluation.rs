//! Answer evaluation — scores each non-blank answer against its reference and
//! aggregates the results into a final score and report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::aggregate::{final_result, FeedbackTier, FinalResult};
use crate::interview::question_bank::{QuestionBank, QuestionEntry};
use crate::interview::report::render_report;
use crate::interview::round2;
use crate::interview::sentiment::polarity;
use crate::interview::similarity::AnswerScorer;
use crate::resume::skills::Category;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerScore {
    pub question: String,
    pub category: Category,
    /// 0 – 100, two decimals
    pub similarity: f64,
    /// -1 – 1, two decimals. Display only.
    pub polarity: f64,
    pub tier: FeedbackTier,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub scores: Vec<AnswerScore>,
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_result: Option<FinalResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    pub scorer_backend: String,
}

/// Scores `answers` in submission order.
///
/// Every submitted question must exist in the bank and appear at most once;
/// blank answers are skipped without error.
pub async fn evaluate(
    bank: &QuestionBank,
    scorer: &dyn AnswerScorer,
    answers: &[SubmittedAnswer],
) -> Result<Evaluation, AppError> {
    let mut seen = HashSet::new();
    let mut answered: Vec<(&QuestionEntry, &str)> = Vec::new();
    for submitted in answers {
        let entry = bank.find(&submitted.question).ok_or_else(|| {
            AppError::Validation(format!("Unknown question: '{}'", submitted.question))
        })?;
        if !seen.insert(entry.prompt) {
            return Err(AppError::Validation(format!(
                "Question answered more than once: '{}'",
                submitted.question
            )));
        }
        if !submitted.answer.trim().is_empty() {
            answered.push((entry, submitted.answer.as_str()));
        }
    }

    let mut scores = Vec::with_capacity(answered.len());
    for (entry, answer) in answered {
        let similarity = scorer.score(answer, entry.reference).await?;
        let tier = FeedbackTier::for_score(similarity);
        scores.push(AnswerScore {
            question: entry.prompt.to_string(),
            category: entry.category,
            similarity,
            polarity: round2(polarity(answer)),
            tier,
            feedback: tier.message(),
        });
    }

    let similarities: Vec<f64> = scores.iter().map(|s| s.similarity).collect();
    let final_result = final_result(&similarities);
    let report = final_result.as_ref().map(render_report);

    Ok(Evaluation {
        scores,
        final_result,
        report,
        scorer_backend: scorer.backend().to_string(),
    })
}
