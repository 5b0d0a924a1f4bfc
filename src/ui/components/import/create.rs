use crate::ui::importer_context::{use_importer, ImporterContext};
use crate::ui::Route;
use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use std::path::Path;
use std::rc::Rc;

const PROVIDERS: &[&str] = &["cds", "springer", "ebl", "safari"];
const MODES: &[&str] = &["IMPORT", "DELETE"];

/// Upload form creating a new import task from a records file
#[component]
pub fn ImportCreate() -> Element {
    let importer = use_importer();
    let mut selected_file = use_signal(|| None::<String>);
    let mut provider = use_signal(|| PROVIDERS[0].to_string());
    let mut mode = use_signal(|| MODES[0].to_string());
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let can_submit = selected_file().is_some() && !is_submitting();

    rsx! {
        div { class: "container mx-auto p-6 max-w-2xl",
            h1 { class: "text-2xl font-bold mb-6", "Import literatures" }

            if let Some(message) = error_message() {
                div { class: "bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded mb-4",
                    p { "{message}" }
                }
            }

            div { class: "bg-white border border-gray-200 rounded-lg p-6 space-y-4",
                div { class: "flex items-center justify-between",
                    div { class: "text-sm text-gray-700",
                        if let Some(path) = selected_file() {
                            span { class: "font-mono", "{path}" }
                        } else {
                            "Select the records file to import"
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700",
                        onclick: move |_| {
                            spawn(async move {
                                if let Some(handle) = AsyncFileDialog::new()
                                    .set_title("Select records file")
                                    .add_filter("Records", &["xml", "json"])
                                    .pick_file()
                                    .await
                                {
                                    let path = handle.path().to_string_lossy().to_string();
                                    selected_file.set(Some(path));
                                }
                            });
                        },
                        "Select file"
                    }
                }

                div { class: "flex gap-4",
                    label { class: "flex-1 text-sm text-gray-700",
                        "Provider"
                        select {
                            class: "mt-1 w-full p-2 border border-gray-300 rounded",
                            value: "{provider}",
                            onchange: move |event: FormEvent| provider.set(event.value()),
                            for p in PROVIDERS {
                                option { value: "{p}", "{p}" }
                            }
                        }
                    }
                    label { class: "flex-1 text-sm text-gray-700",
                        "Mode"
                        select {
                            class: "mt-1 w-full p-2 border border-gray-300 rounded",
                            value: "{mode}",
                            onchange: move |event: FormEvent| mode.set(event.value()),
                            for m in MODES {
                                option { value: "{m}", "{m}" }
                            }
                        }
                    }
                }

                button {
                    class: if can_submit {
                        "w-full px-4 py-3 bg-green-600 text-white rounded hover:bg-green-700 font-medium"
                    } else {
                        "w-full px-4 py-3 bg-green-600 text-white rounded opacity-50 font-medium"
                    },
                    disabled: !can_submit,
                    onclick: {
                        let importer = importer.clone();
                        let navigator = navigator();
                        move |_| {
                            let importer = importer.clone();
                            spawn(async move {
                                let Some(path) = selected_file() else {
                                    return;
                                };
                                is_submitting.set(true);
                                error_message.set(None);

                                match submit_import(&importer, &path, &provider(), &mode()).await {
                                    Ok(task_id) => {
                                        navigator.push(Route::ImportTaskDetails { task_id });
                                    }
                                    Err(message) => {
                                        error_message.set(Some(message));
                                        is_submitting.set(false);
                                    }
                                }
                            });
                        }
                    },
                    if is_submitting() { "Uploading..." } else { "Import" }
                }
            }
        }
    }
}

/// Read the selected file and hand it to the importer service as multipart
/// form data. The service answers with the created task's identifier.
async fn submit_import(
    importer: &Rc<ImporterContext>,
    path: &str,
    provider: &str,
    mode: &str,
) -> Result<String, String> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path, e))?;

    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "records".to_string());

    let form = reqwest::multipart::Form::new()
        .part(
            "file",
            reqwest::multipart::Part::bytes(data).file_name(file_name),
        )
        .text("provider", provider.to_string())
        .text("mode", mode.to_string());

    importer
        .client
        .create_task(form)
        .await
        .map(|task| task.id)
        .map_err(|e| format!("Failed to create import task: {}", e))
}
