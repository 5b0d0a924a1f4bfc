use crate::config::{use_config, Config};
use crate::importer::client::ImporterClient;
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;

/// Shared access to the importer service for every page in the app.
pub struct ImporterContext {
    pub client: ImporterClient,
    pub poll_interval: Duration,
    catalogue_base_url: String,
}

impl ImporterContext {
    pub fn new(config: &Config) -> Self {
        Self {
            client: ImporterClient::new(config.importer_base_url.clone()),
            poll_interval: config.poll_interval(),
            catalogue_base_url: config.catalogue_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of a catalogue document's detail page. The catalogue web app owns
    /// those views, so report rows link out to it.
    pub fn document_url(&self, pid: &str) -> String {
        format!(
            "{}/documents/{}",
            self.catalogue_base_url,
            urlencoding::encode(pid)
        )
    }
}

/// Provider component to make the importer context available throughout the app
#[component]
pub fn ImporterContextProvider(children: Element) -> Element {
    let config = use_config();
    let importer_ctx = ImporterContext::new(&config);

    use_context_provider(move || Rc::new(importer_ctx));

    rsx! {
        {children}
    }
}

pub fn use_importer() -> Rc<ImporterContext> {
    use_context::<Rc<ImporterContext>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ImporterContext {
        ImporterContext::new(&Config {
            importer_base_url: "http://localhost:5000/api".to_string(),
            catalogue_base_url: "http://localhost:3000/backoffice/".to_string(),
            poll_interval_secs: 5,
        })
    }

    #[test]
    fn document_urls_point_at_the_catalogue() {
        assert_eq!(
            context().document_url("docid-1"),
            "http://localhost:3000/backoffice/documents/docid-1"
        );
    }

    #[test]
    fn document_pids_are_escaped() {
        assert_eq!(
            context().document_url("a b"),
            "http://localhost:3000/backoffice/documents/a%20b"
        );
    }
}
