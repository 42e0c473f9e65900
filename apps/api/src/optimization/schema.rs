//! Response schema declared to Gemini so it returns JSON shaped like
//! [`OptimizationResult`](crate::optimization::models::OptimizationResult).

use serde_json::{json, Value};

/// OpenAPI-subset schema in Gemini's `Type` vocabulary.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "optimizedResume": {
                "type": "STRING",
                "description": "The full, plain text optimized resume content, formatted with bullet points."
            },
            "latexBlocks": {
                "type": "OBJECT",
                "properties": {
                    "header": { "type": "STRING", "description": "LaTeX code for the header section." },
                    "summary": { "type": "STRING", "description": "LaTeX code for the summary section." },
                    "skills": { "type": "STRING", "description": "LaTeX code for the skills section." },
                    "experience": { "type": "STRING", "description": "LaTeX code for the experience section." },
                    "education": { "type": "STRING", "description": "LaTeX code for the education section." }
                },
                "required": ["header", "summary", "skills", "experience", "education"]
            },
            "atsReport": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "INTEGER", "description": "Estimated ATS score from 0 to 100." },
                    "keywordMatch": { "type": "STRING", "description": "Percentage and description of keyword matching." },
                    "topImprovements": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of top improvements made to the resume."
                    }
                },
                "required": ["score", "keywordMatch", "topImprovements"]
            }
        },
        "required": ["optimizedResume", "latexBlocks", "atsReport"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::models::fixtures::sample_result;

    fn required(value: &Value) -> Vec<&str> {
        value["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_every_object_level_declares_required_fields() {
        let schema = response_schema();
        assert_eq!(
            required(&schema),
            vec!["optimizedResume", "latexBlocks", "atsReport"]
        );
        assert_eq!(
            required(&schema["properties"]["latexBlocks"]),
            vec!["header", "summary", "skills", "experience", "education"]
        );
        assert_eq!(
            required(&schema["properties"]["atsReport"]),
            vec!["score", "keywordMatch", "topImprovements"]
        );
    }

    #[test]
    fn test_schema_property_names_match_result_serialization() {
        // The serialized result must carry exactly the schema's top-level keys.
        let schema = response_schema();
        let result = serde_json::to_value(sample_result(70)).unwrap();
        let mut result_keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        let mut schema_keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
        result_keys.sort();
        schema_keys.sort();
        assert_eq!(result_keys, schema_keys);
    }

    #[test]
    fn test_score_is_integer_and_improvements_string_array() {
        let report = &response_schema()["properties"]["atsReport"]["properties"];
        assert_eq!(report["score"]["type"], "INTEGER");
        assert_eq!(report["topImprovements"]["type"], "ARRAY");
        assert_eq!(report["topImprovements"]["items"]["type"], "STRING");
    }
}
