//! Typed view of the evaluation object returned by the API.
//!
//! The server passes the model's JSON through unvalidated; these structs are
//! the one consumer. List-valued fields default to empty so a sparse but
//! well-formed object still renders.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub total_score: f64,
    pub max_score: f64,
    pub rating: String,
    pub overall_feedback: String,
    #[serde(default)]
    pub priority_improvements: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub improved_prompts: Vec<ImprovedPrompt>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub feedback: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovedPrompt {
    pub version: String,
    pub prompt: String,
    #[serde(default)]
    pub improvements: Vec<String>,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_evaluation() {
        let json = r#"{
            "totalScore": 72,
            "maxScore": 100,
            "rating": "Adequate - Requires substantial enhancement",
            "overallFeedback": "Decent start.",
            "priorityImprovements": ["Add an output format"],
            "dimensions": [
                {"name": "Clarity and Specificity", "score": 12, "maxScore": 20,
                 "feedback": "Somewhat vague.", "improvements": ["Quantify constraints"]}
            ],
            "improvedPrompts": [
                {"version": "Version 1: Basic fixes", "prompt": "Do X.",
                 "improvements": ["Clearer verb"], "explanation": "Targets clarity."}
            ]
        }"#;
        let eval: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(eval.total_score, 72.0);
        assert_eq!(eval.dimensions.len(), 1);
        assert_eq!(eval.dimensions[0].max_score, 20.0);
        assert_eq!(eval.improved_prompts[0].version, "Version 1: Basic fixes");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{
            "totalScore": 50, "maxScore": 100,
            "rating": "Weak - Needs significant restructuring",
            "overallFeedback": "Thin."
        }"#;
        let eval: Evaluation = serde_json::from_str(json).unwrap();
        assert!(eval.priority_improvements.is_empty());
        assert!(eval.dimensions.is_empty());
        assert!(eval.improved_prompts.is_empty());
    }
}
