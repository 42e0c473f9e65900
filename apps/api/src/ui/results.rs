//! Tabbed, read-only viewer for an `OptimizationResult`:
//! plain-text resume, LaTeX blocks, and the ATS report.

use askama::Template;

use crate::optimization::models::OptimizationResult;

/// Circumference of the score ring (r = 36), rounded as drawn.
pub const RING_CIRCUMFERENCE: f64 = 226.0;

/// Colour band of the ATS score ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// score > 75
    Strong,
    /// score > 50
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score > 75 {
            ScoreBand::Strong
        } else if score > 50 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "#22c55e",
            ScoreBand::Fair => "#eab308",
            ScoreBand::Weak => "#ef4444",
        }
    }
}

/// Stroke offset that leaves `score`% of the ring drawn.
pub fn ring_dash_offset(score: u8) -> f64 {
    RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * f64::from(score) / 100.0
}

pub struct LatexBlockView<'a> {
    pub key: &'static str,
    pub code: &'a str,
}

/// Everything `results.html` reads, precomputed from a result.
pub struct ResultsView<'a> {
    pub optimized_resume: &'a str,
    pub latex_blocks: Vec<LatexBlockView<'a>>,
    pub score: u8,
    pub ring_color: &'static str,
    pub ring_circumference: f64,
    pub ring_offset: String,
    pub keyword_match: &'a str,
    pub improvements: Vec<&'a str>,
}

impl<'a> ResultsView<'a> {
    pub fn new(result: &'a OptimizationResult) -> Self {
        let report = &result.ats_report;
        Self {
            optimized_resume: &result.optimized_resume,
            latex_blocks: result
                .latex_blocks
                .entries()
                .into_iter()
                .map(|(key, code)| LatexBlockView { key, code })
                .collect(),
            score: report.score,
            ring_color: ScoreBand::for_score(report.score).color(),
            ring_circumference: RING_CIRCUMFERENCE,
            ring_offset: format!("{:.2}", ring_dash_offset(report.score)),
            keyword_match: &report.keyword_match,
            improvements: report.top_improvements.iter().map(String::as_str).collect(),
        }
    }
}

/// The viewer on its own; `page.html` includes the same template.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate<'a> {
    pub view: ResultsView<'a>,
}

impl<'a> ResultsTemplate<'a> {
    pub fn new(result: &'a OptimizationResult) -> Self {
        Self {
            view: ResultsView::new(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::models::fixtures::sample_result;

    fn render(result: &OptimizationResult) -> String {
        ResultsTemplate::new(result).render().unwrap()
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(90), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(30), ScoreBand::Weak);
    }

    #[test]
    fn test_score_band_boundaries_are_exclusive() {
        assert_eq!(ScoreBand::for_score(76), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_score(75), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(51), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(50), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Weak);
    }

    #[test]
    fn test_ring_uses_band_color() {
        assert!(render(&sample_result(90)).contains(r##"stroke="#22c55e""##));
        assert!(render(&sample_result(60)).contains(r##"stroke="#eab308""##));
        assert!(render(&sample_result(30)).contains(r##"stroke="#ef4444""##));
    }

    #[test]
    fn test_ring_dash_offset() {
        assert_eq!(ring_dash_offset(0), 226.0);
        assert_eq!(ring_dash_offset(100), 0.0);
        assert_eq!(ring_dash_offset(50), 113.0);
        let html = render(&sample_result(50));
        assert!(html.contains(r#"stroke-dasharray="226""#));
        assert!(html.contains(r#"stroke-dashoffset="113.00""#));
    }

    #[test]
    fn test_copy_buttons_carry_exact_text() {
        let mut result = sample_result(80);
        result.optimized_resume = "Line <1>\n\"Quoted\" & more".to_string();
        let html = render(&result);
        assert!(html.contains(
            r#"data-copy="Line &lt;1&gt;
&quot;Quoted&quot; &amp; more""#
        ));
        assert!(html.contains(r#"data-copy="\section{Skills}""#));
    }

    #[test]
    fn test_three_tabs_with_resume_active() {
        let html = render(&sample_result(80));
        assert!(html.contains(r#"class="active" data-tab="resume""#));
        assert!(html.contains(r#"data-panel="latex" hidden"#));
        assert!(html.contains(r#"data-panel="report" hidden"#));
        assert!(!html.contains(r#"data-panel="resume" hidden"#));
    }

    #[test]
    fn test_latex_blocks_render_in_section_order() {
        let html = render(&sample_result(80));
        let positions: Vec<usize> = ["header", "summary", "skills", "experience", "education"]
            .iter()
            .map(|k| html.find(&format!(r#"<span class="block-key">{k}</span>"#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_improvements_are_numbered_in_order() {
        let html = render(&sample_result(80));
        let first = html
            .find(r#"<span class="n">1</span><span>Aligned job titles"#)
            .unwrap();
        let second = html
            .find(r#"<span class="n">2</span><span>Reordered skills"#)
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_model_text_is_escaped() {
        let mut result = sample_result(80);
        result.ats_report.keyword_match = "<script>alert(1)".to_string();
        let html = render(&result);
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }
}
