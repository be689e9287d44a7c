use std::sync::Arc;

use crate::config::Config;
use crate::interview::question_bank::QuestionBank;
use crate::interview::similarity::{AnswerScorer, TfIdfScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Static question table, read-only for the life of the process.
    pub bank: Arc<QuestionBank>,
    /// Pluggable answer scorer. Default: TfIdfScorer.
    pub scorer: Arc<dyn AnswerScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bank: Arc::new(QuestionBank::builtin()),
            scorer: Arc::new(TfIdfScorer),
        }
    }
}
