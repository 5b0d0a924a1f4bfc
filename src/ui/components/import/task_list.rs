use crate::importer::models::{TaskState, TaskSummary};
use crate::ui::importer_context::use_importer;
use crate::ui::Route;
use dioxus::prelude::*;

/// Overview of the import tasks known to the service
#[component]
pub fn ImportTaskList() -> Element {
    let importer = use_importer();

    let tasks_resource = {
        let importer = importer.clone();
        use_resource(move || {
            let client = importer.client.clone();
            async move { client.list().await }
        })
    };

    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Import tasks" }
                Link {
                    to: Route::ImportCreate {},
                    class: "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700",
                    "New import"
                }
            }

            match tasks_resource.value().read().as_ref() {
                None => rsx! {
                    div { class: "flex justify-center items-center py-12",
                        div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500" }
                        p { class: "ml-4 text-gray-600", "Loading import tasks..." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded",
                        p { "Failed to load import tasks: {e}" }
                    }
                },
                Some(Ok(tasks)) => rsx! {
                    if tasks.is_empty() {
                        p { class: "text-gray-600 py-12 text-center", "No import tasks yet." }
                    } else {
                        div { class: "bg-white border border-gray-200 rounded-lg divide-y divide-gray-200",
                            for task in tasks.iter() {
                                TaskRow { key: "{task.id}", task: task.clone() }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TaskRow(task: TaskSummary) -> Element {
    let submitted = task
        .submitted_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        Link {
            to: Route::ImportTaskDetails { task_id: task.id.clone() },
            class: "flex items-center gap-4 px-4 py-3 hover:bg-gray-50",
            span { class: state_badge_class(task.state), {state_label(task.state)} }
            span { class: "flex-1 text-gray-900", "{task.original_filename}" }
            span { class: "text-sm text-gray-600", "{task.provider} / {task.mode}" }
            if let Some(total) = task.total_entries {
                span { class: "text-sm text-gray-600", "{total} entries" }
            }
            span { class: "text-sm text-gray-500", "{submitted}" }
        }
    }
}

fn state_label(state: TaskState) -> &'static str {
    match state {
        TaskState::Running => "running",
        TaskState::Succeeded => "succeeded",
        TaskState::Failed => "failed",
        TaskState::Other => "stopped",
    }
}

fn state_badge_class(state: TaskState) -> &'static str {
    match state {
        TaskState::Running => "px-2 py-1 text-xs bg-yellow-100 text-yellow-800 rounded",
        TaskState::Succeeded => "px-2 py-1 text-xs bg-green-100 text-green-800 rounded",
        TaskState::Failed => "px-2 py-1 text-xs bg-red-100 text-red-800 rounded",
        TaskState::Other => "px-2 py-1 text-xs bg-gray-100 text-gray-800 rounded",
    }
}
