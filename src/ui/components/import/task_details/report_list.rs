use crate::importer::models::{DocumentRef, ReportEntry};
use crate::ui::importer_context::use_importer;
use dioxus::prelude::*;

use super::report_details::ReportDetails;

/// Accumulated report entries as a single-expansion accordion
#[component]
pub fn ReportList(reports: Vec<ReportEntry>) -> Element {
    let mut active_index = use_signal(|| None::<usize>);

    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg divide-y divide-gray-200",
            for (index, entry) in reports.iter().enumerate() {
                {
                    let is_active = active_index() == Some(index);
                    rsx! {
                        div { key: "{index}",
                            div {
                                class: "flex items-center gap-2 px-4 py-3 cursor-pointer hover:bg-gray-50",
                                onclick: move |_| {
                                    active_index.set(toggle(active_index(), index));
                                },
                                span { class: "text-gray-400", if is_active { "▾" } else { "▸" } }
                                ReportRowLabel { entry: entry.clone() }
                            }
                            if is_active {
                                ReportDetails { entry: entry.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Clicking the open row collapses it; clicking any other row opens that row
/// exclusively.
fn toggle(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
fn ReportRowLabel(entry: ReportEntry) -> Element {
    let importer = use_importer();

    match row_label(&entry) {
        RowLabel::Document(doc) => {
            let url = importer.document_url(&doc.pid);
            rsx! {
                a {
                    href: "{url}",
                    target: "_blank",
                    class: "text-blue-600 hover:underline",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    "{doc.title}"
                }
            }
        }
        RowLabel::NoDocument => rsx! {
            span { "No document created or updated" }
        },
        RowLabel::ImportError => rsx! {
            span { class: "text-red-600", "Error on importing this record" }
        },
    }
}

#[derive(Debug, PartialEq)]
enum RowLabel<'a> {
    Document(&'a DocumentRef),
    NoDocument,
    ImportError,
}

fn row_label(entry: &ReportEntry) -> RowLabel<'_> {
    match entry.document() {
        Some(doc) => RowLabel::Document(doc),
        None if entry.success => RowLabel::NoDocument,
        None => RowLabel::ImportError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::models::EntryReport;

    fn document(pid: &str) -> DocumentRef {
        DocumentRef {
            pid: pid.to_string(),
            title: format!("Document {pid}"),
        }
    }

    #[test]
    fn clicking_the_open_row_collapses_it() {
        assert_eq!(toggle(Some(1), 1), None);
    }

    #[test]
    fn clicking_another_row_opens_it_exclusively() {
        assert_eq!(toggle(Some(1), 2), Some(2));
        assert_eq!(toggle(None, 0), Some(0));
    }

    #[test]
    fn created_document_renders_as_a_link_label() {
        let entry = ReportEntry {
            success: true,
            report: EntryReport {
                created_document: Some(document("docid-1")),
                updated_document: None,
            },
        };
        assert_eq!(row_label(&entry), RowLabel::Document(&document("docid-1")));
    }

    #[test]
    fn updated_document_is_used_when_nothing_was_created() {
        let entry = ReportEntry {
            success: true,
            report: EntryReport {
                created_document: None,
                updated_document: Some(document("docid-2")),
            },
        };
        assert_eq!(row_label(&entry), RowLabel::Document(&document("docid-2")));
    }

    #[test]
    fn success_without_documents_gets_the_literal_label() {
        let entry = ReportEntry {
            success: true,
            report: EntryReport::default(),
        };
        assert_eq!(row_label(&entry), RowLabel::NoDocument);
    }

    #[test]
    fn failure_gets_the_error_label_regardless_of_documents() {
        let entry = ReportEntry {
            success: false,
            report: EntryReport {
                created_document: Some(document("docid-1")),
                updated_document: None,
            },
        };
        assert_eq!(row_label(&entry), RowLabel::ImportError);
    }
}
