use crate::importer::poll::{PollHandle, PollState, TaskPoller, TaskView};
use crate::ui::importer_context::use_importer;
use dioxus::prelude::*;
use std::sync::Arc;

use super::header::TaskStatusHeader;
use super::report_list::ReportList;

/// Progress and results of one import task.
///
/// A poller runs for as long as this page is mounted, feeding the accumulated
/// state into a signal; navigating away stops it unconditionally.
#[component]
pub fn ImportTaskDetails(task_id: ReadSignal<String>) -> Element {
    let poll = use_task_poll(task_id);
    let state = poll();
    let view = state.view();

    rsx! {
        PageContainer {
            TaskStatusHeader { view }
            match view {
                TaskView::Fetching => rsx! {},
                TaskView::Failed => rsx! {
                    ImportFailedMessage {}
                },
                _ => rsx! {
                    TaskReportSection { state: state.clone() }
                },
            }
        }
    }
}

#[component]
fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto p-6", {children} }
    }
}

/// Drive a [`TaskPoller`] for the mounted task and mirror its updates into a
/// signal the page can render from.
fn use_task_poll(task_id: ReadSignal<String>) -> Signal<PollState> {
    let importer = use_importer();
    let mut state = use_signal(PollState::default);
    let mut handle = use_signal(|| None::<PollHandle>);

    use_effect(move || {
        let id = task_id();

        // A new task id replaces the running poller; dropping the previous
        // handle cancels its timer before the new loop starts.
        if let Some(mut previous) = handle.write().take() {
            previous.stop();
        }
        state.set(PollState::default());

        let poller = TaskPoller::new(
            Arc::new(importer.client.clone()),
            id,
            importer.poll_interval,
        );
        let started = poller.start();
        let mut rx = started.subscribe();
        handle.set(Some(started));

        spawn(async move {
            while rx.changed().await.is_ok() {
                let latest = rx.borrow_and_update().clone();
                state.set(latest);
            }
        });
    });

    use_drop(move || {
        if let Some(mut running) = handle.write().take() {
            running.stop();
        }
    });

    state
}

#[component]
fn TaskReportSection(state: PollState) -> Element {
    let Some(task) = state.data else {
        return rsx! {};
    };

    rsx! {
        h2 { class: "text-xl font-bold mt-8 mb-2", "Literatures" }
        match (task.loaded_entries, task.total_entries) {
            (Some(loaded), Some(total)) if total > 0 => rsx! {
                p { class: "text-gray-700 mb-4", "Processed {loaded} literatures out of {total}." }
            },
            _ => rsx! {
                p { class: "text-gray-700 mb-4", "Processing file..." }
            },
        }
        if !task.reports.is_empty() {
            ReportList { reports: task.reports.clone() }
        }
    }
}

#[component]
fn ImportFailedMessage() -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded mt-6",
            p { class: "font-semibold", "Failed to import" }
            p {
                "The import of the literatures failed, please try again."
                br {}
                "If this error persists contact our technical support."
            }
        }
    }
}
