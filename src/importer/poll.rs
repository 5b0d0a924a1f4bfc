// # Task polling
//
// Drives repeated `check` calls against the importer service until a task
// leaves the RUNNING state, merging each paginated response into one
// accumulated view:
//
// - **PollState**: accumulated client-side state, with a pure merge step
// - **TaskView**: the view state the UI dispatches on, derived once per update
// - **TaskPoller** / **PollHandle**: the timer loop and its cancellation handle

use crate::importer::client::ImporterApi;
use crate::importer::models::{ImportTask, TaskState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Client-side view of one import task, accumulated across polls.
///
/// Starts empty. On every poll response the new page of `reports` is appended
/// onto the entries accumulated so far while every other field is replaced by
/// the latest snapshot. Once `completed` is set the state is frozen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollState {
    pub completed: bool,
    pub data: Option<ImportTask>,
}

impl PollState {
    /// Offset of the next page to request: the number of entries the service
    /// reported as processed, 0 when nothing is known yet.
    pub fn next_entry(&self) -> u64 {
        self.data
            .as_ref()
            .and_then(|task| task.loaded_entries)
            .unwrap_or(0)
    }

    pub fn is_loading(&self) -> bool {
        !self.completed
    }

    /// Merge one poll response into the accumulated state.
    ///
    /// Pages are assumed disjoint and ordered by the server, so the new page
    /// is appended as-is, without deduplication.
    pub fn apply(&self, snapshot: ImportTask) -> PollState {
        let mut merged = snapshot;
        let page = std::mem::take(&mut merged.reports);

        let mut reports = self
            .data
            .as_ref()
            .map(|task| task.reports.clone())
            .unwrap_or_default();
        reports.extend(page);
        merged.reports = reports;

        PollState {
            completed: merged.state.is_terminal(),
            data: Some(merged),
        }
    }

    /// View state for rendering, computed once per update.
    pub fn view(&self) -> TaskView {
        match &self.data {
            None => TaskView::Fetching,
            Some(task) => match task.state {
                TaskState::Running => TaskView::InProgress {
                    loaded: task.loaded_entries,
                    total: task.total_entries,
                },
                TaskState::Succeeded => TaskView::Succeeded,
                TaskState::Failed => TaskView::Failed,
                TaskState::Other => TaskView::Stopped,
            },
        }
    }
}

/// What the task details view should show, derived from [`PollState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskView {
    /// No snapshot received yet.
    Fetching,
    /// The task is still running; counts may be partially known.
    InProgress {
        loaded: Option<u64>,
        total: Option<u64>,
    },
    Succeeded,
    /// Terminal FAILED: the per-entry breakdown is replaced by a single
    /// failure message.
    Failed,
    /// Terminal state this client does not recognise. Reported as a failure,
    /// but accumulated entries are still shown.
    Stopped,
}

/// Polls one import task until it leaves the RUNNING state.
///
/// Requests are strictly sequential: each tick awaits its response and merges
/// it before the next tick may fire, so report pages are always appended in
/// the order their polls were issued and a stale response can never overwrite
/// a newer one.
pub struct TaskPoller<A> {
    api: Arc<A>,
    task_id: String,
    interval: Duration,
}

impl<A: ImporterApi + 'static> TaskPoller<A> {
    pub fn new(api: Arc<A>, task_id: impl Into<String>, interval: Duration) -> Self {
        Self {
            api,
            task_id: task_id.into(),
            interval,
        }
    }

    /// Start polling. The first `check` goes out immediately, subsequent ones
    /// at the configured interval. There is no backoff and no retry cap: a
    /// server that never reports a terminal state is polled indefinitely.
    pub fn start(self) -> PollHandle {
        let TaskPoller {
            api,
            task_id,
            interval,
        } = self;

        let (tx, rx) = watch::channel(PollState::default());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;

                let state = tx.borrow().clone();
                if state.completed {
                    break;
                }

                match api.check(&task_id, state.next_entry()).await {
                    Ok(snapshot) => {
                        let merged = state.apply(snapshot);
                        let completed = merged.completed;

                        if tx.send(merged).is_err() {
                            // Every subscriber is gone, nothing left to update.
                            break;
                        }
                        if completed {
                            debug!("Import task {} reached a terminal state", task_id);
                            break;
                        }
                    }
                    Err(err) => {
                        // Transient by assumption; the next tick retries.
                        warn!("Checking import task {} failed: {}", task_id, err);
                    }
                }
            }
        });

        PollHandle {
            task: Some(task),
            rx,
        }
    }
}

/// Handle to a running poll loop.
///
/// Dropping the handle stops the loop, so a view being torn down cannot keep
/// issuing requests; a response still in flight at that point is discarded
/// with the loop rather than applied anywhere.
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
    rx: watch::Receiver<PollState>,
}

impl PollHandle {
    /// Watch the accumulated state. The receiver starts at the idle state and
    /// observes every merged snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.rx.clone()
    }

    /// Stop polling. Safe to call from any state; repeated calls are no-ops.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::models::{DocumentRef, EntryReport, ReportEntry};

    fn entry(pid: &str) -> ReportEntry {
        ReportEntry {
            success: true,
            report: EntryReport {
                created_document: Some(DocumentRef {
                    pid: pid.to_string(),
                    title: format!("Document {pid}"),
                }),
                updated_document: None,
            },
        }
    }

    fn snapshot(
        state: TaskState,
        loaded: Option<u64>,
        total: Option<u64>,
        reports: Vec<ReportEntry>,
    ) -> ImportTask {
        ImportTask {
            state,
            loaded_entries: loaded,
            total_entries: total,
            reports,
        }
    }

    fn pids(state: &PollState) -> Vec<String> {
        state
            .data
            .as_ref()
            .map(|task| {
                task.reports
                    .iter()
                    .map(|r| r.document().unwrap().pid.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn idle_state_requests_from_offset_zero() {
        let state = PollState::default();
        assert_eq!(state.next_entry(), 0);
        assert!(state.is_loading());
        assert_eq!(state.view(), TaskView::Fetching);
    }

    #[test]
    fn pages_accumulate_in_poll_order() {
        let first = PollState::default().apply(snapshot(
            TaskState::Running,
            Some(2),
            Some(4),
            vec![entry("a"), entry("b")],
        ));

        assert!(!first.completed);
        assert_eq!(first.next_entry(), 2);
        assert_eq!(first.view(), TaskView::InProgress { loaded: Some(2), total: Some(4) });

        let second = first.apply(snapshot(
            TaskState::Succeeded,
            Some(4),
            Some(4),
            vec![entry("c"), entry("d")],
        ));

        assert!(second.completed);
        assert_eq!(pids(&second), vec!["a", "b", "c", "d"]);
        assert_eq!(second.view(), TaskView::Succeeded);
        assert!(!second.is_loading());
    }

    #[test]
    fn non_report_fields_are_replaced_wholesale() {
        let first = PollState::default().apply(snapshot(
            TaskState::Running,
            Some(1),
            None,
            vec![entry("a")],
        ));
        let second = first.apply(snapshot(TaskState::Running, Some(3), Some(9), vec![]));

        let task = second.data.as_ref().unwrap();
        assert_eq!(task.loaded_entries, Some(3));
        assert_eq!(task.total_entries, Some(9));
        assert_eq!(second.next_entry(), 3);
        // The earlier page is still there even though the response was empty.
        assert_eq!(pids(&second), vec!["a"]);
    }

    #[test]
    fn empty_payload_does_not_reset_accumulated_entries() {
        let first =
            PollState::default().apply(snapshot(TaskState::Running, Some(1), None, vec![entry("a")]));
        let second = first.apply(snapshot(TaskState::Running, None, None, vec![]));

        assert_eq!(pids(&second), vec!["a"]);
        // Unknown progress falls back to offset 0; the server re-sends from there.
        assert_eq!(second.next_entry(), 0);
    }

    #[test]
    fn every_non_running_state_is_terminal() {
        for state in [TaskState::Succeeded, TaskState::Failed, TaskState::Other] {
            let polled = PollState::default().apply(snapshot(state, None, None, vec![]));
            assert!(polled.completed, "{state:?} should complete polling");
        }

        let polled =
            PollState::default().apply(snapshot(TaskState::Running, None, None, vec![]));
        assert!(!polled.completed);
    }

    #[test]
    fn failed_and_unrecognised_states_map_to_distinct_views() {
        let failed = PollState::default().apply(snapshot(
            TaskState::Failed,
            None,
            None,
            vec![entry("a")],
        ));
        assert_eq!(failed.view(), TaskView::Failed);

        let stopped = PollState::default().apply(snapshot(
            TaskState::Other,
            None,
            None,
            vec![entry("a")],
        ));
        assert_eq!(stopped.view(), TaskView::Stopped);
    }

    #[test]
    fn in_progress_view_carries_partial_counts() {
        let polled =
            PollState::default().apply(snapshot(TaskState::Running, Some(5), None, vec![]));
        assert_eq!(
            polled.view(),
            TaskView::InProgress {
                loaded: Some(5),
                total: None
            }
        );
    }
}
