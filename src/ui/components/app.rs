use crate::config::Config;
use crate::ui::importer_context::ImporterContextProvider;
use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(Config::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ImporterContextProvider {
            div { class: "min-h-screen bg-gray-50", Router::<Route> {} }
        }
    }
}
