//! File page extractor adapter

use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::fs;
use url::Url;

use crate::application::ports::{ExtractError, PageExtractor};
use crate::domain::Activation;

/// Snapshot extractor for file:// pages. The file-access grant has been
/// verified before this adapter runs; an OS-level refusal here is still
/// tagged as a blocked file URL.
pub struct FilePageExtractor;

impl FilePageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FilePageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageExtractor for FilePageExtractor {
    async fn extract_html(&self, activation: &Activation) -> Result<String, ExtractError> {
        let url_str = activation
            .url
            .as_deref()
            .ok_or_else(|| ExtractError::Failed("activation has no URL".to_string()))?;
        let url = Url::parse(url_str)
            .map_err(|e| ExtractError::Failed(format!("invalid URL {url_str}: {e}")))?;
        let path = url
            .to_file_path()
            .map_err(|_| ExtractError::Failed(format!("not a file path: {url_str}")))?;

        match fs::read_to_string(&path).await {
            Ok(content) if content.is_empty() => Err(ExtractError::NoResult),
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(ExtractError::FileUrlBlocked),
            Err(e) => Err(ExtractError::Failed(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}
