//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// The file-scheme access grant. Checked by the orchestrator, never
    /// requested programmatically.
    pub allow_file_urls: Option<bool>,
    /// Parsing boundary deployment shape: "offscreen" or "inline".
    pub parser_shape: Option<String>,
    /// Whether to show desktop notifications for failures.
    pub notify: Option<bool>,
    /// User agent sent when snapshotting http/https pages.
    pub user_agent: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            allow_file_urls: Some(false),
            parser_shape: Some("offscreen".to_string()),
            notify: Some(true),
            user_agent: Some(default_user_agent()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            allow_file_urls: other.allow_file_urls.or(self.allow_file_urls),
            parser_shape: other.parser_shape.or(self.parser_shape),
            notify: other.notify.or(self.notify),
            user_agent: other.user_agent.or(self.user_agent),
        }
    }

    pub fn allow_file_urls_or_default(&self) -> bool {
        self.allow_file_urls.unwrap_or(false)
    }

    pub fn parser_shape_or_default(&self) -> &str {
        self.parser_shape.as_deref().unwrap_or("offscreen")
    }

    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    pub fn user_agent_or_default(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

fn default_user_agent() -> String {
    format!("lms-clipper/{}", env!("CARGO_PKG_VERSION"))
}
