// # Importer Module
//
// Client-side integration with the remote importer service:
//
// - **ImporterClient**: one-shot HTTP operations (create task, check, list)
// - **TaskPoller**: polls a task's status until it reaches a terminal state,
//   accumulating paginated report entries into one growing result set
// - **models**: serde wire types shared by both

pub mod client;
pub mod models;
pub mod poll;

pub use client::{ImporterApi, ImporterClient, ImporterError};
pub use models::{
    CreatedTask, DocumentRef, EntryReport, ImportTask, ReportEntry, TaskState, TaskSummary,
};
pub use poll::{PollHandle, PollState, TaskPoller, TaskView};
