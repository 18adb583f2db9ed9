//! Analysis report model and free-text formatting.

pub mod format;
pub mod titles;
pub mod types;

pub use format::{FormattedBlock, format_text};
pub use titles::resolve_title;
pub use types::{AnalysisReport, AnalysisResponse, TaskResult};
