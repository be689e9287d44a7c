//! Axum route handlers for answer evaluation and the report download.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate, Evaluation, SubmittedAnswer};
use crate::interview::report::content_disposition;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

/// POST /api/v1/interview/evaluate
///
/// Scores every non-blank answer. `final` and `report` are omitted when nothing
/// was answered.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, AppError> {
    let evaluation = evaluate(&state.bank, state.scorer.as_ref(), &request.answers).await?;
    log_evaluation(&evaluation);
    Ok(Json(evaluation))
}

/// POST /api/v1/interview/report
///
/// Same input as evaluate; returns the two-line report as a text attachment.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let evaluation = evaluate(&state.bank, state.scorer.as_ref(), &request.answers).await?;
    log_evaluation(&evaluation);

    let report = evaluation.report.ok_or_else(|| {
        AppError::UnprocessableEntity("No answers were given; there is no report".to_string())
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition()),
        ],
        report,
    ))
}

fn log_evaluation(evaluation: &Evaluation) {
    match &evaluation.final_result {
        Some(result) => info!(
            "Scored {} answers: final {} ({})",
            evaluation.scores.len(),
            result.score,
            result.level
        ),
        None => info!("No answers to score"),
    }
}
