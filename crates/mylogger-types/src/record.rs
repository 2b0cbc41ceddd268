use serde::{Deserialize, Serialize};

/// Identity of the instrumented project, bound to a logger at construction.
///
/// Captured into every record so a shared store can be filtered per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIdentity {
    pub name: String,
    pub version: String,
}

impl ProjectIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One captured exception, shaped like a row of the `logs` table.
///
/// Created exclusively by the capture interceptor; mutated at most once by
/// the annotation path (bug_fix_* columns). `id` is store-assigned and is
/// `None` until the insert completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_name: String,
    pub project_version: String,
    /// Source file where the exception originated.
    pub file_path: String,
    /// 1-based source line of the deepest frame, when resolvable.
    pub line: Option<i64>,
    pub function: String,
    /// Literal text of the originating source line; empty when the source
    /// file is inaccessible.
    pub line_code: String,
    pub exception_type: String,
    pub exception_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
    /// Full formatted diagnostic: optional caller header plus the rendered
    /// failure and its origin line.
    pub message: String,
    pub module: String,
    /// Logical logger/channel name.
    pub name: String,
    /// Wall-clock seconds since the Unix epoch.
    pub time: f64,
    /// Seconds since the logger was constructed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bug_fix_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bug_fix_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bug_fix_date: Option<f64>,
}
