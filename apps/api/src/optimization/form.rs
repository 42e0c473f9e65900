//! Form state — the two inputs, selected style, and the outcome of the last submission.
//!
//! Submission contract:
//! - allowed only when both inputs are longer than `MIN_INPUT_CHARS`
//! - at most one submission in flight
//! - success clears the error and replaces the result wholesale
//! - failure clears the result and records the error message verbatim

use std::fmt::Display;

use thiserror::Error;

use crate::optimization::models::{OptimizationInput, OptimizationResult, ResumeStyle};

/// Both inputs must be strictly longer than this many characters.
pub const MIN_INPUT_CHARS: usize = 50;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "An unexpected error occurred while processing your resume.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(
        "Both the job description and the resume must be longer than {} characters.",
        MIN_INPUT_CHARS
    )]
    InputTooShort,

    #[error("An optimization is already in progress.")]
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub job_description: String,
    pub user_resume: String,
    pub style: ResumeStyle,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<OptimizationResult>,
}

impl FormState {
    pub fn new(job_description: String, user_resume: String, style: ResumeStyle) -> Self {
        let mut form = Self {
            job_description,
            user_resume,
            ..Self::default()
        };
        form.set_style(style);
        form
    }

    pub fn is_valid(&self) -> bool {
        exceeds_minimum(&self.job_description) && exceeds_minimum(&self.user_resume)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_loading
    }

    /// Changes only the style that the next submission will transmit.
    pub fn set_style(&mut self, style: ResumeStyle) {
        self.style = style;
    }

    /// Enters the loading state and snapshots the input to send.
    pub fn begin_submission(&mut self) -> Result<OptimizationInput, SubmitError> {
        if self.is_loading {
            return Err(SubmitError::InFlight);
        }
        if !self.is_valid() {
            return Err(SubmitError::InputTooShort);
        }

        self.is_loading = true;
        self.error = None;
        self.result = None;

        Ok(OptimizationInput {
            job_description: self.job_description.clone(),
            user_resume: self.user_resume.clone(),
            style: self.style,
        })
    }

    /// Leaves the loading state with the outcome of the remote call.
    pub fn complete<E: Display>(&mut self, outcome: Result<OptimizationResult, E>) {
        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(error_message(&e));
            }
        }
    }
}

fn exceeds_minimum(text: &str) -> bool {
    text.chars().count() > MIN_INPUT_CHARS
}

fn error_message(e: &impl Display) -> String {
    let message = e.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
