//! Resume Optimizer — pluggable, trait-based backend that turns an input into a result.
//!
//! Default: `GeminiOptimizer` (one `generateContent` call with a response schema).
//!
//! `AppState` holds an `Arc<dyn ResumeOptimizer>`, so handlers never see the backend.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::llm_client::{GeminiClient, LlmError};
use crate::optimization::models::{OptimizationInput, OptimizationResult};
use crate::optimization::prompts::{OPTIMIZATION_SYSTEM, OPTIMIZATION_TASK};
use crate::optimization::schema::response_schema;

/// Highest score the ATS report may carry.
pub const MAX_SCORE: u8 = 100;

/// The optimizer trait. Implement this to swap backends without touching
/// the handlers.
///
/// Carried in `AppState` as `Arc<dyn ResumeOptimizer>`.
#[async_trait]
pub trait ResumeOptimizer: Send + Sync {
    async fn optimize(&self, input: &OptimizationInput) -> Result<OptimizationResult, LlmError>;

    /// Short backend name, for logs.
    fn backend(&self) -> &'static str;
}

/// Optimizer backed by a single Gemini call.
pub struct GeminiOptimizer {
    llm: GeminiClient,
    schema: Value,
}

impl GeminiOptimizer {
    pub fn new(llm: GeminiClient) -> Self {
        Self {
            llm,
            schema: response_schema(),
        }
    }
}

#[async_trait]
impl ResumeOptimizer for GeminiOptimizer {
    async fn optimize(&self, input: &OptimizationInput) -> Result<OptimizationResult, LlmError> {
        let prompt = build_prompt(input);

        let result: OptimizationResult = self
            .llm
            .generate_json(&prompt, OPTIMIZATION_SYSTEM, &self.schema)
            .await?;

        validate_result(&result)?;

        info!(
            "Optimization complete: score={}, improvements={}",
            result.ats_report.score,
            result.ats_report.top_improvements.len()
        );

        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

/// Builds the per-call prompt. Each input lands in the prompt exactly once;
/// placeholder-like text inside user input is left alone.
pub fn build_prompt(input: &OptimizationInput) -> String {
    format!(
        "{OPTIMIZATION_TASK}\n\n\
         JOB DESCRIPTION:\n{}\n\n\
         USER RESUME:\n{}\n\n\
         SELECTED TEMPLATE STYLE:\n{}\n",
        input.job_description, input.user_resume, input.style
    )
}

/// Checks the one constraint the schema cannot express.
fn validate_result(result: &OptimizationResult) -> Result<(), LlmError> {
    if result.ats_report.score > MAX_SCORE {
        return Err(LlmError::InvalidResult(format!(
            "ATS score {} is outside 0-{MAX_SCORE}",
            result.ats_report.score
        )));
    }
    Ok(())
}
