//! Axum route handlers for résumé analysis and skill-based question lookup.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::question_bank::QuestionEntry;
use crate::interview::selector::select_questions;
use crate::resume::extract::extract_resume_text;
use crate::resume::skills::{detect_skills_or_default, Category, SkillDetection, SkillTerm};
use crate::state::AppState;

/// Multipart field carrying the PDF.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub question: &'static str,
    pub category: Category,
}

impl From<&QuestionEntry> for QuestionView {
    fn from(entry: &QuestionEntry) -> Self {
        Self {
            question: entry.prompt,
            category: entry.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub skills: Vec<SkillTerm>,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    pub categories: Vec<Category>,
    pub questions: Vec<QuestionView>,
    pub page_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub skills: Vec<SkillTerm>,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyEntry {
    pub term: SkillTerm,
    pub category: Category,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
///
/// Accepts a multipart upload with a `resume` PDF field, extracts its text and
/// returns the detected skills and the interview questions they select.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let pdf = read_resume_field(&mut multipart).await?;
    info!("Received resume upload ({} bytes)", pdf.len());

    let extracted = tokio::task::spawn_blocking(move || extract_resume_text(&pdf))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("The uploaded PDF could not be read".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("Extraction task cancelled: {e}"))
            }
        })??;

    let detection = detect_skills_or_default(&extracted.text);
    log_detection(&detection);

    let questions = select_questions(&state.bank, &detection.skills)
        .into_iter()
        .map(QuestionView::from)
        .collect();

    Ok(Json(AnalyzeResponse {
        categories: detection.categories(),
        warning: detection.warning(),
        used_fallback: detection.used_fallback,
        skills: detection.skills,
        questions,
        page_count: extracted.page_count,
    }))
}

/// POST /api/v1/questions
///
/// Selects questions for an explicit skill list. An empty list uses the fallback.
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let mut skills: Vec<SkillTerm> = Vec::new();
    for raw in &request.skills {
        let term = raw.parse::<SkillTerm>().map_err(AppError::Validation)?;
        if !skills.contains(&term) {
            skills.push(term);
        }
    }

    let detection = SkillDetection::from_skills(skills);
    log_detection(&detection);

    let questions = select_questions(&state.bank, &detection.skills)
        .into_iter()
        .map(QuestionView::from)
        .collect();

    Ok(Json(QuestionsResponse {
        warning: detection.warning(),
        used_fallback: detection.used_fallback,
        skills: detection.skills,
        questions,
    }))
}

/// GET /api/v1/skills
pub async fn handle_vocabulary() -> Json<Vec<VocabularyEntry>> {
    Json(
        SkillTerm::ALL
            .iter()
            .map(|&term| VocabularyEntry {
                term,
                category: term.category(),
            })
            .collect(),
    )
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(RESUME_FIELD) {
            return field.bytes().await.map_err(multipart_error);
        }
    }
    Err(AppError::Validation(format!(
        "Multipart field '{RESUME_FIELD}' is required"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

fn log_detection(detection: &SkillDetection) {
    if detection.used_fallback {
        warn!("No vocabulary skills detected; falling back to python");
    } else {
        let names: Vec<&str> = detection.skills.iter().map(|s| s.as_str()).collect();
        info!("Detected skills: {}", names.join(", "));
    }
}
