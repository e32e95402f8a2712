//! File-scheme access check adapter
//!
//! The grant lives in the app configuration (`allow_file_urls`) and is
//! only ever checked here, never requested. The primary method answers
//! from an explicitly persisted value; the legacy method is the
//! callback-era API shape that falls back to the platform default when
//! the value was never set.

use async_trait::async_trait;

use crate::application::ports::{FileAccessCheck, FileAccessError};
use crate::domain::AppConfig;

/// File-access check backed by the merged application config.
pub struct ConfigFileAccess {
    config: AppConfig,
}

impl ConfigFileAccess {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FileAccessCheck for ConfigFileAccess {
    async fn is_allowed(&self) -> Result<bool, FileAccessError> {
        // Without an explicit grant value this method cannot answer;
        // callers fall back to the legacy check.
        self.config.allow_file_urls.ok_or_else(|| {
            FileAccessError::Unavailable("allow_file_urls is not set".to_string())
        })
    }

    async fn is_allowed_legacy(&self) -> Result<bool, FileAccessError> {
        Ok(self.config.allow_file_urls_or_default())
    }
}
