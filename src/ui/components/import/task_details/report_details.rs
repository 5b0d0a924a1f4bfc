use crate::importer::models::ReportEntry;
use dioxus::prelude::*;

/// Expanded content of one report row
#[component]
pub fn ReportDetails(entry: ReportEntry) -> Element {
    rsx! {
        div { class: "px-4 py-3 bg-gray-50 text-sm text-gray-700 space-y-1",
            if let Some(doc) = entry.report.created_document.as_ref() {
                p {
                    "Created document "
                    span { class: "font-mono", "{doc.pid}" }
                    ": {doc.title}"
                }
            }
            if let Some(doc) = entry.report.updated_document.as_ref() {
                p {
                    "Updated document "
                    span { class: "font-mono", "{doc.pid}" }
                    ": {doc.title}"
                }
            }
            if entry.success {
                p { class: "text-green-700", "Record imported" }
            } else {
                p { class: "text-red-700", "Record failed to import" }
            }
        }
    }
}
