#![cfg(feature = "test-utils")]

mod support;

use std::sync::Arc;
use std::time::Duration;

use carrel::importer::models::{DocumentRef, EntryReport, ImportTask, ReportEntry, TaskState};
use carrel::importer::poll::{TaskPoller, TaskView};
use carrel::test_support::{ScriptStep, ScriptedImporter};

use crate::support::tracing_init;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

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

#[tokio::test]
async fn accumulates_pages_in_poll_order_and_stops_on_terminal_state() {
    tracing_init();

    let importer = Arc::new(ScriptedImporter::new(vec![
        ScriptStep::Respond(snapshot(
            TaskState::Running,
            Some(2),
            Some(4),
            vec![entry("a"), entry("b")],
        )),
        ScriptStep::Respond(snapshot(
            TaskState::Succeeded,
            Some(4),
            Some(4),
            vec![entry("c"), entry("d")],
        )),
    ]));

    let mut handle = TaskPoller::new(importer.clone(), "42", POLL_INTERVAL).start();
    let mut rx = handle.subscribe();

    loop {
        rx.changed().await.expect("poller dropped before completing");
        if rx.borrow().completed {
            break;
        }
    }

    let final_state = rx.borrow().clone();
    let task = final_state.data.as_ref().unwrap();

    let pids: Vec<_> = task
        .reports
        .iter()
        .map(|r| r.document().unwrap().pid.as_str())
        .collect();
    assert_eq!(pids, ["a", "b", "c", "d"]);
    assert_eq!(final_state.view(), TaskView::Succeeded);

    // Each page was requested from the offset the previous response reported.
    assert_eq!(importer.observed_offsets(), vec![0, 2]);

    // A terminal state means no further network calls.
    tokio::time::sleep(POLL_INTERVAL * 5).await;
    assert_eq!(importer.calls(), 2);

    handle.stop();
    handle.stop();
}

#[tokio::test]
async fn a_transport_error_is_retried_on_the_next_tick() {
    tracing_init();

    let importer = Arc::new(ScriptedImporter::new(vec![
        ScriptStep::Error,
        ScriptStep::Respond(snapshot(TaskState::Succeeded, Some(0), Some(0), vec![])),
    ]));

    let handle = TaskPoller::new(importer.clone(), "42", POLL_INTERVAL).start();
    let mut rx = handle.subscribe();

    loop {
        rx.changed().await.expect("poller dropped before completing");
        if rx.borrow().completed {
            break;
        }
    }

    // The failed call did not advance the offset.
    assert_eq!(importer.observed_offsets(), vec![0, 0]);
}

#[tokio::test]
async fn a_failed_task_reports_the_failure_view() {
    tracing_init();

    let importer = Arc::new(ScriptedImporter::new(vec![
        ScriptStep::Respond(snapshot(
            TaskState::Running,
            Some(1),
            Some(3),
            vec![entry("a")],
        )),
        ScriptStep::Respond(snapshot(TaskState::Failed, Some(1), Some(3), vec![])),
    ]));

    let handle = TaskPoller::new(importer.clone(), "42", POLL_INTERVAL).start();
    let mut rx = handle.subscribe();

    loop {
        rx.changed().await.expect("poller dropped before completing");
        if rx.borrow().completed {
            break;
        }
    }

    let final_state = rx.borrow().clone();
    assert_eq!(final_state.view(), TaskView::Failed);
    // Entries from earlier pages are still accumulated, even though the
    // failure view suppresses them.
    assert_eq!(final_state.data.as_ref().unwrap().reports.len(), 1);
}

#[tokio::test]
async fn an_unrecognised_terminal_state_stops_polling() {
    tracing_init();

    let importer = Arc::new(ScriptedImporter::new(vec![ScriptStep::Respond(snapshot(
        TaskState::Other,
        None,
        None,
        vec![entry("a")],
    ))]));

    let handle = TaskPoller::new(importer.clone(), "42", POLL_INTERVAL).start();
    let mut rx = handle.subscribe();

    rx.changed().await.expect("poller dropped before completing");
    assert!(rx.borrow().completed);
    assert_eq!(rx.borrow().view(), TaskView::Stopped);

    tokio::time::sleep(POLL_INTERVAL * 5).await;
    assert_eq!(importer.calls(), 1);
}

#[tokio::test]
async fn stop_cancels_polling_and_is_idempotent() {
    tracing_init();

    // A script of RUNNING responses would keep the poller busy forever.
    let steps = (0..100)
        .map(|i| {
            ScriptStep::Respond(snapshot(
                TaskState::Running,
                Some(i),
                Some(1000),
                vec![],
            ))
        })
        .collect();
    let importer = Arc::new(ScriptedImporter::new(steps));

    let mut handle = TaskPoller::new(importer.clone(), "42", POLL_INTERVAL).start();
    let mut rx = handle.subscribe();

    rx.changed().await.expect("first poll never arrived");

    handle.stop();
    let calls_after_stop = importer.calls();

    tokio::time::sleep(POLL_INTERVAL * 5).await;
    assert_eq!(importer.calls(), calls_after_stop);

    // Stopping again, or after the loop is long gone, is a no-op.
    handle.stop();
    drop(handle);
}
