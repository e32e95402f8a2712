//! Page extraction infrastructure module
//!
//! Reaches the activated page by URL scheme: http/https via an HTTP GET,
//! file via a filesystem read. The orchestrator has already validated the
//! scheme and the file-access grant by the time an extractor runs.

mod file;
mod http;

pub use file::FilePageExtractor;
pub use http::HttpPageExtractor;

use async_trait::async_trait;
use url::Url;

use crate::application::ports::{ExtractError, PageExtractor};
use crate::domain::Activation;

/// Routes extraction to the right adapter for the tab's scheme.
pub struct SchemeRouter {
    http: HttpPageExtractor,
    file: FilePageExtractor,
}

#[async_trait]
impl PageExtractor for SchemeRouter {
    async fn extract_html(&self, activation: &Activation) -> Result<String, ExtractError> {
        let url_str = activation
            .url
            .as_deref()
            .ok_or_else(|| ExtractError::Failed("activation has no URL".to_string()))?;
        let url = Url::parse(url_str)
            .map_err(|e| ExtractError::Failed(format!("invalid URL {url_str}: {e}")))?;

        match url.scheme() {
            "http" | "https" => self.http.extract_html(activation).await,
            "file" => self.file.extract_html(activation).await,
            other => Err(ExtractError::Failed(format!(
                "unsupported scheme: {other}"
            ))),
        }
    }
}

/// Create the default extractor: scheme-routed HTTP + file adapters.
pub fn create_extractor(user_agent: &str) -> Box<dyn PageExtractor> {
    Box::new(SchemeRouter {
        http: HttpPageExtractor::new(user_agent),
        file: FilePageExtractor::new(),
    })
}
