use crate::ui::Route;
use dioxus::prelude::*;

/// Fallback for URLs no route matches
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container mx-auto p-6 text-center py-12",
            h1 { class: "text-2xl font-bold mb-2", "Page not found" }
            p { class: "text-gray-600 mb-6", "No page matches /{path}" }
            Link {
                to: Route::ImportTaskList {},
                class: "text-blue-600 hover:underline",
                "Back to import tasks"
            }
        }
    }
}
