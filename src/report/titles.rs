//! Display-name resolution for backend task identifiers.

/// Static mapping from backend task identifiers to user-facing titles
const TASK_TITLES: &[(&str, &str)] = &[
    ("diagnostic_analysis_task", "Diagnostic Image Analysis"),
    ("treatment_advice_task", "Treatment Options and Costs"),
    ("doctor_recommendation_task", "Doctor Recommendations"),
];

/// Resolve a backend task identifier to its display title.
///
/// Unmapped identifiers are returned verbatim, so this is total over all
/// inputs.
pub fn resolve_title(task_name: &str) -> &str {
    TASK_TITLES
        .iter()
        .find(|(name, _)| *name == task_name)
        .map(|(_, title)| *title)
        .unwrap_or(task_name)
}
