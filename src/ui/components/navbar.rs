use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the backoffice navigation shell
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "bg-gray-800 text-white px-6 py-4 flex items-center gap-6",
            span { class: "font-bold tracking-wide", "carrel" }
            Link {
                to: Route::ImportTaskList {},
                class: "hover:text-blue-300 transition-colors",
                "Import tasks"
            }
            Link {
                to: Route::ImportCreate {},
                class: "hover:text-blue-300 transition-colors",
                "New import"
            }
        }
        Outlet::<Route> {}
    }
}
