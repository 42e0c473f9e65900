//! Input and output shapes of a resume optimization.
//!
//! `OptimizationResult` mirrors the response schema declared to Gemini
//! (see `schema.rs`) field for field, so the model's JSON deserializes directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Template style the optimized resume should be written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeStyle {
    #[default]
    Professional,
    Modern,
    Minimal,
}

impl ResumeStyle {
    pub const ALL: [ResumeStyle; 3] = [
        ResumeStyle::Professional,
        ResumeStyle::Modern,
        ResumeStyle::Minimal,
    ];

    /// Value transmitted to the model and used as the form option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStyle::Professional => "Professional",
            ResumeStyle::Modern => "Modern",
            ResumeStyle::Minimal => "Minimal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResumeStyle::Professional => "Professional Style",
            ResumeStyle::Modern => "Modern Style",
            ResumeStyle::Minimal => "Minimal Style",
        }
    }
}

impl fmt::Display for ResumeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission's worth of user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationInput {
    // Missing text defaults to empty so the length check reports it.
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub user_resume: String,
    #[serde(default)]
    pub style: ResumeStyle,
}

/// LaTeX fragments for each fixed resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatexBlocks {
    pub header: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl LatexBlocks {
    /// Blocks keyed by section name, in display order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("header", &self.header),
            ("summary", &self.summary),
            ("skills", &self.skills),
            ("experience", &self.experience),
            ("education", &self.education),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// 0 – 100
    pub score: u8,
    pub keyword_match: String,
    pub top_improvements: Vec<String>,
}

/// Full structured output of one optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_resume: String,
    pub latex_blocks: LatexBlocks,
    pub ats_report: AtsReport,
}
