use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Lifecycle state reported by the importer service.
///
/// `RUNNING` is the only non-terminal value. Every other string the service
/// sends, including states this client does not know about, is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TaskState {
    Running,
    Succeeded,
    Failed,
    Other,
}

impl From<String> for TaskState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "RUNNING" => TaskState::Running,
            "SUCCEEDED" => TaskState::Succeeded,
            "FAILED" => TaskState::Failed,
            _ => TaskState::Other,
        }
    }
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// Snapshot of an import task as returned by the `check` endpoint.
///
/// `reports` holds only the page of entries starting at the requested offset,
/// not the full history. Counts may be absent while the service is still
/// reading the uploaded file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportTask {
    pub state: TaskState,
    pub loaded_entries: Option<u64>,
    pub total_entries: Option<u64>,
    #[serde(default)]
    pub reports: Vec<ReportEntry>,
}

/// Outcome of importing one literature record within a task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub report: EntryReport,
}

impl ReportEntry {
    /// The document this entry produced: the created one if present, else the
    /// updated one. Failed entries never reference a document.
    pub fn document(&self) -> Option<&DocumentRef> {
        if !self.success {
            return None;
        }
        self.report
            .created_document
            .as_ref()
            .or(self.report.updated_document.as_ref())
    }
}

/// Document references attached to a report entry. At most one of the two
/// fields is populated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryReport {
    pub created_document: Option<DocumentRef>,
    pub updated_document: Option<DocumentRef>,
}

/// Minimal projection of a catalogue document, enough to link to its detail
/// page. The catalogue owns the full record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentRef {
    pub pid: String,
    pub title: String,
}

/// Response of task creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedTask {
    pub id: String,
}

/// One row of the task-list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskSummary {
    pub id: String,
    pub state: TaskState,
    pub provider: String,
    pub mode: String,
    pub original_filename: String,
    pub total_entries: Option<u64>,
    pub submitted_at: Option<DateTime<Utc>>,
}
