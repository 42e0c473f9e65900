//! Axum route handlers for the HTML form.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::optimization::form::FormState;
use crate::optimization::models::ResumeStyle;
use crate::state::AppState;
use crate::ui::page::render_page;

/// Fields posted by the page's form.
#[derive(Debug, Deserialize)]
pub struct OptimizeForm {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub user_resume: String,
    #[serde(default)]
    pub style: ResumeStyle,
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(render_page(&FormState::default())?))
}

/// POST /optimize
///
/// One submission: validate → single optimizer call → single state transition → render.
/// Service failures render inline with 200; rejected input renders with 422.
pub async fn handle_optimize_form(
    State(state): State<AppState>,
    Form(fields): Form<OptimizeForm>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut form = FormState::new(fields.job_description, fields.user_resume, fields.style);

    let input = match form.begin_submission() {
        Ok(input) => input,
        Err(e) => {
            form.error = Some(e.to_string());
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render_page(&form)?)));
        }
    };

    info!(
        "Optimizing resume via {}: jd_chars={}, resume_chars={}, style={}",
        state.optimizer.backend(),
        input.job_description.chars().count(),
        input.user_resume.chars().count(),
        input.style
    );

    let outcome = state.optimizer.optimize(&input).await;
    if let Err(e) = &outcome {
        warn!("Optimization failed: {e}");
    }
    form.complete(outcome);

    Ok((StatusCode::OK, Html(render_page(&form)?)))
}
