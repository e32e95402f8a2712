//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// LmsClipper - clip assignment text from e-learning pages
#[derive(Parser, Debug)]
#[command(name = "lms-clipper")]
#[command(version = "2.0.0")]
#[command(about = "Clip structured assignment text from e-learning pages to the clipboard")]
#[command(long_about = None)]
pub struct Cli {
    /// Page URL to clip (the activated tab's URL)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Tab id to attribute the activation to
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub tab: u32,

    /// Parsing boundary shape (offscreen, inline)
    #[arg(short = 's', long, value_name = "SHAPE")]
    pub parser_shape: Option<String>,

    /// Allow clipping file:// pages
    #[arg(long)]
    pub allow_file_urls: bool,

    /// Show desktop notifications for failures
    #[arg(short = 'n', long, conflicts_with = "quiet")]
    pub notify: bool,

    /// Report failures on the terminal only
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// User agent for http/https page snapshots
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid configuration keys
pub const VALID_CONFIG_KEYS: [&str; 4] =
    ["allow_file_urls", "parser_shape", "notify", "user_agent"];

/// Check whether a key is a known configuration key
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
