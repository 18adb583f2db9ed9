//! Data model for backend analysis responses.
//!
//! The backend returns two top-level sections: a free-text overall summary
//! (nested under a chat-completion shape) and a list of named task results,
//! each carrying up to three optional free-text fields. The wire structs
//! mirror that JSON exactly; [`AnalysisReport`] is the flattened in-memory
//! model the rest of the crate works with.

use serde::{Deserialize, Serialize};

/// Raw backend response, as received on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    /// Chat-completion-shaped overall analysis
    #[serde(default)]
    pub groq_analysis: Option<GroqAnalysis>,

    /// Per-task detailed analysis
    #[serde(default)]
    pub crew_analysis: Option<CrewAnalysis>,
}

/// The `groq_analysis` section: a list of chat completion choices
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqAnalysis {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One chat completion choice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Message,
}

/// The message inside a completion choice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: Option<String>,
}

/// The `crew_analysis` section: ordered task outputs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewAnalysis {
    #[serde(default)]
    pub tasks_output: Vec<TaskResult>,
}

/// One named sub-result of the analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskResult {
    /// Backend task identifier (resolved to a display title at render time)
    #[serde(default)]
    pub name: String,

    /// Free-text description of the task outcome
    #[serde(default)]
    pub description: Option<String>,

    /// Free-text summary of the task outcome
    #[serde(default)]
    pub summary: Option<String>,

    /// Free-text raw detail of the task outcome
    #[serde(default)]
    pub raw: Option<String>,
}

/// In-memory analysis report, flattened from [`AnalysisResponse`].
///
/// One report exists per successful upload and is replaced wholesale on the
/// next capture cycle; it has no identity beyond "most recent".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall free-text summary (absent when the backend sent none)
    pub summary: Option<String>,

    /// Task results in backend order
    pub tasks: Vec<TaskResult>,
}

impl AnalysisReport {
    /// Parse a report from a raw backend response body.
    ///
    /// Fails only when the body is not valid JSON; missing sections simply
    /// produce an empty summary or task list.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let response: AnalysisResponse = serde_json::from_str(body)?;
        Ok(Self::from_response(response))
    }

    /// Flatten a wire response into the in-memory model
    pub fn from_response(response: AnalysisResponse) -> Self {
        let summary = response
            .groq_analysis
            .and_then(|g| g.choices.into_iter().next())
            .and_then(|c| c.message.content);

        let tasks = response
            .crew_analysis
            .map(|c| c.tasks_output)
            .unwrap_or_default();

        Self { summary, tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "groq_analysis": {
                "choices": [{"message": {"content": "Overall summary"}}]
            },
            "crew_analysis": {
                "tasks_output": [
                    {"name": "diagnostic_analysis_task", "description": "desc", "summary": "sum", "raw": "raw"},
                    {"name": "treatment_advice_task", "raw": "only raw"}
                ]
            }
        }"#;

        let report = AnalysisReport::from_json(body).unwrap();
        assert_eq!(report.summary.as_deref(), Some("Overall summary"));
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks[0].name, "diagnostic_analysis_task");
        assert_eq!(report.tasks[0].description.as_deref(), Some("desc"));
        assert_eq!(report.tasks[1].description, None);
        assert_eq!(report.tasks[1].raw.as_deref(), Some("only raw"));
    }

    #[test]
    fn test_parse_preserves_task_order() {
        let body = r#"{
            "crew_analysis": {
                "tasks_output": [
                    {"name": "b_task"},
                    {"name": "a_task"},
                    {"name": "c_task"}
                ]
            }
        }"#;

        let report = AnalysisReport::from_json(body).unwrap();
        let names: Vec<&str> = report.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b_task", "a_task", "c_task"]);
    }

    #[test]
    fn test_parse_missing_sections() {
        let report = AnalysisReport::from_json("{}").unwrap();
        assert_eq!(report.summary, None);
        assert!(report.tasks.is_empty());
    }

    #[test]
    fn test_parse_empty_choices() {
        let body = r#"{"groq_analysis": {"choices": []}}"#;
        let report = AnalysisReport::from_json(body).unwrap();
        assert_eq!(report.summary, None);
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        assert!(AnalysisReport::from_json("not json").is_err());
    }
}
