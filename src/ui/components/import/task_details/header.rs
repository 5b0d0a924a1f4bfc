use crate::importer::poll::TaskView;
use crate::ui::Route;
use dioxus::prelude::*;

/// Back-link plus the one-line status of the task
#[component]
pub fn TaskStatusHeader(view: TaskView) -> Element {
    let ready = !matches!(view, TaskView::Fetching);

    rsx! {
        Link {
            to: Route::ImportCreate {},
            class: if ready {
                "inline-block px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded"
            } else {
                "inline-block px-4 py-2 bg-gray-200 text-gray-800 rounded opacity-50 pointer-events-none"
            },
            "← Import other files"
        }

        div { class: "mt-6 flex items-center gap-2 text-gray-700",
            match view {
                TaskView::Fetching => rsx! {
                    div { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-blue-500" }
                    span { "Fetching status..." }
                },
                TaskView::InProgress { .. } => rsx! {
                    div {
                        class: "animate-spin rounded-full h-4 w-4 border-b-2 border-blue-500",
                        aria_label: "Import in progress",
                    }
                    span {
                        "Importing literatures... This may take a while. You may leave the page, the process will continue in background."
                    }
                },
                TaskView::Succeeded => rsx! {
                    span { class: "text-green-600", aria_label: "Completed", "✔" }
                    span { "Literatures imported successfully." }
                },
                TaskView::Failed | TaskView::Stopped => rsx! {
                    span { class: "text-red-600", aria_label: "Failed", "✖" }
                    span { "Literatures import failed." }
                },
            }
        }
    }
}
