//! Full-page render of a `FormState`: header, input panel, inline error, result panel.

use askama::Template;

use crate::llm_client::MODEL;
use crate::optimization::form::FormState;
use crate::optimization::models::ResumeStyle;
use crate::ui::assets::{script, STYLESHEET};
use crate::ui::results::ResultsView;

pub struct StyleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub stylesheet: &'static str,
    pub script: String,
    pub model_label: String,
    pub styles: Vec<StyleOption>,
    pub job_description: &'a str,
    pub user_resume: &'a str,
    /// Controls render disabled/readonly while a submission is in flight.
    pub locked: bool,
    pub submit_enabled: bool,
    pub error: Option<&'a str>,
    pub results: Option<ResultsView<'a>>,
}

impl<'a> PageTemplate<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            stylesheet: STYLESHEET,
            script: script(),
            model_label: model_label(),
            styles: ResumeStyle::ALL
                .iter()
                .map(|style| StyleOption {
                    value: style.as_str(),
                    label: style.label(),
                    selected: *style == form.style,
                })
                .collect(),
            job_description: &form.job_description,
            user_resume: &form.user_resume,
            locked: form.is_loading,
            submit_enabled: form.can_submit(),
            error: form.error.as_deref(),
            results: form.result.as_ref().map(ResultsView::new),
        }
    }
}

pub fn render_page(form: &FormState) -> Result<String, askama::Error> {
    PageTemplate::new(form).render()
}

/// "gemini-2.5-flash" → "Gemini 2.5 Flash"
fn model_label() -> String {
    MODEL
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::optimization::models::fixtures::{long_text, sample_result};

    fn filled_form() -> FormState {
        FormState::new(long_text("Job"), long_text("Resume"), ResumeStyle::Modern)
    }

    fn render(form: &FormState) -> String {
        render_page(form).unwrap()
    }

    #[test]
    fn test_model_label() {
        assert_eq!(model_label(), "Gemini 2.5 Flash");
    }

    #[test]
    fn test_empty_form_shows_ready_state_and_disabled_submit() {
        let html = render(&FormState::default());
        assert!(html.contains("Ready to Optimize"));
        assert!(html.contains(r#"<button id="submit" type="submit" disabled>"#));
        assert!(!html.contains(r#"class="error""#));
        assert!(html.contains(r#"<option value="Professional" selected>Professional Style</option>"#));
        assert!(html.contains(r#"<option value="Modern">Modern Style</option>"#));
    }

    #[test]
    fn test_valid_form_enables_submit() {
        let html = render(&filled_form());
        assert!(html.contains(r#"<button id="submit" type="submit">"#));
        assert!(html.contains(r#"<option value="Modern" selected>"#));
    }

    #[test]
    fn test_in_flight_form_locks_controls() {
        let mut form = filled_form();
        form.begin_submission().unwrap();
        let html = render(&form);
        assert!(html.contains(r#"<button id="submit" type="submit" disabled>"#));
        assert!(html.contains("Optimizing..."));
        assert!(html.contains(r#"<select name="style" disabled>"#));
        assert!(html.contains(r#"data-loading="true""#));
        assert!(html.contains(r#"here..." readonly>"#));
    }

    #[test]
    fn test_error_is_shown_inline_without_results() {
        let mut form = filled_form();
        form.begin_submission().unwrap();
        form.complete::<LlmError>(Err(LlmError::EmptyContent));
        let html = render(&form);
        assert!(html.contains(r#"<div class="error" role="alert">No content generated from Gemini.</div>"#));
        assert!(html.contains("Ready to Optimize"));
        assert!(!html.contains(r#"class="viewer""#));
    }

    #[test]
    fn test_result_replaces_empty_state() {
        let mut form = filled_form();
        form.begin_submission().unwrap();
        form.complete::<LlmError>(Ok(sample_result(88)));
        let html = render(&form);
        assert!(html.contains(r#"class="viewer""#));
        assert!(html.contains(r##"stroke="#22c55e""##));
        assert!(!html.contains("Ready to Optimize"));
    }

    #[test]
    fn test_inputs_are_preserved_and_escaped() {
        let form = FormState::new(
            format!("{} <script>", long_text("JD")),
            long_text("Resume"),
            ResumeStyle::Minimal,
        );
        let html = render(&form);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains(" <script>"));
        assert!(html.contains(r#"<option value="Minimal" selected>"#));
    }

    #[test]
    fn test_leading_newline_in_input_survives_textarea_parsing() {
        // Browsers drop one LF right after <textarea>; the template emits a guard LF.
        let jd = format!("\n{}", "x".repeat(50));
        let resume = format!("\n{}", long_text("Resume"));
        let form = FormState::new(jd.clone(), resume, ResumeStyle::Professional);
        assert!(form.can_submit());

        let html = render(&form);
        assert!(html.contains(&format!(
            "placeholder=\"Paste the full job description here...\">\n{jd}</textarea>"
        )));
        assert!(html.contains("placeholder=\"Paste your current resume content here...\">\n\nResume"));
    }
}
