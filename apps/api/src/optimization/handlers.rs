//! Axum route handlers for the Optimization JSON API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::optimization::form::FormState;
use crate::optimization::models::{OptimizationInput, OptimizationResult};
use crate::state::AppState;

/// POST /api/v1/optimize
///
/// Runs one optimization for a JSON `OptimizationInput` and returns the result.
/// Applies the same length thresholds as the HTML form.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizationInput>,
) -> Result<Json<OptimizationResult>, AppError> {
    let mut form = FormState::new(request.job_description, request.user_resume, request.style);
    let input = form.begin_submission()?;

    info!(
        "API optimization via {}: jd_chars={}, resume_chars={}, style={}",
        state.optimizer.backend(),
        input.job_description.chars().count(),
        input.user_resume.chars().count(),
        input.style
    );

    let result = state.optimizer.optimize(&input).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::optimization::models::fixtures::{long_text, sample_result};
    use crate::routes::build_router;
    use crate::state::test_support::{state_with, StubOptimizer};

    fn request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/optimize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "jobDescription": long_text("Job"),
            "userResume": long_text("Resume"),
            "style": "Modern"
        })
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_optimize_returns_result_json() {
        let app = build_router(state_with(StubOptimizer::Succeeds(sample_result(77))));
        let response = app.oneshot(request(valid_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["atsReport"]["score"], 77);
        assert_eq!(body["latexBlocks"]["header"], "\\name{Jane Doe}");
    }

    #[tokio::test]
    async fn test_short_input_is_validation_error() {
        let app = build_router(state_with(StubOptimizer::Succeeds(sample_result(77))));
        let body = json!({"jobDescription": "too short", "userResume": long_text("Resume")});
        let response = app.oneshot(request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let app = build_router(state_with(StubOptimizer::Succeeds(sample_result(77))));
        let response = app
            .oneshot(request(json!({"userResume": long_text("Resume")})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("longer than 50 characters"));
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let app = build_router(state_with(StubOptimizer::MissingKey));
        let response = app.oneshot(request(valid_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "API configuration error: Missing API Key."
        );
    }

    #[tokio::test]
    async fn test_empty_response_is_llm_error() {
        let app = build_router(state_with(StubOptimizer::Empty));
        let response = app.oneshot(request(valid_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await["error"]["message"],
            "No content generated from Gemini."
        );
    }
}
