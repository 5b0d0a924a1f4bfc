// Test support utilities for both unit and integration tests

use crate::importer::client::{ImporterApi, ImporterError};
use crate::importer::models::ImportTask;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted reaction to a `check` call.
pub enum ScriptStep {
    /// Respond with this snapshot.
    Respond(ImportTask),
    /// Fail the call, exercising the poller's retry path.
    Error,
}

/// Scripted importer backend for testing.
///
/// Pops one [`ScriptStep`] per `check` call and records the offsets it was
/// called with. An exhausted script answers with an error, so a poller that
/// keeps calling after its script ended shows up in the recorded offsets.
pub struct ScriptedImporter {
    steps: Mutex<VecDeque<ScriptStep>>,
    observed_offsets: Mutex<Vec<u64>>,
}

impl ScriptedImporter {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            observed_offsets: Mutex::new(Vec::new()),
        }
    }

    /// Offsets of every `check` call seen so far, in call order.
    pub fn observed_offsets(&self) -> Vec<u64> {
        self.observed_offsets.lock().unwrap().clone()
    }

    /// Number of `check` calls seen so far.
    pub fn calls(&self) -> usize {
        self.observed_offsets.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ImporterApi for ScriptedImporter {
    async fn check(&self, _task_id: &str, next_entry: u64) -> Result<ImportTask, ImporterError> {
        self.observed_offsets.lock().unwrap().push(next_entry);

        match self.steps.lock().unwrap().pop_front() {
            Some(ScriptStep::Respond(task)) => Ok(task),
            Some(ScriptStep::Error) | None => Err(ImporterError::TaskNotFound),
        }
    }
}
