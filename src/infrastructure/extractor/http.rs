//! HTTP page extractor adapter

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::application::ports::{ExtractError, PageExtractor};
use crate::domain::Activation;

/// Snapshot extractor for http/https pages.
pub struct HttpPageExtractor {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpPageExtractor {
    /// Create a new HTTP extractor
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl PageExtractor for HttpPageExtractor {
    async fn extract_html(&self, activation: &Activation) -> Result<String, ExtractError> {
        let url = activation
            .url
            .as_deref()
            .ok_or_else(|| ExtractError::Failed("activation has no URL".to_string()))?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ExtractError::Failed(e.to_string()))?;

        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                // Tagged at the site so the orchestrator never has to
                // recover the kind from message text.
                Err(ExtractError::MissingHostPermission)
            }
            status if !status.is_success() => Err(ExtractError::Failed(format!(
                "page responded with status {status}"
            ))),
            _ => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ExtractError::Failed(e.to_string()))?;
                if body.is_empty() {
                    return Err(ExtractError::NoResult);
                }
                Ok(body)
            }
        }
    }
}
