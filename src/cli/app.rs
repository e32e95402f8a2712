//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::ClipPageUseCase;
use crate::domain::config::AppConfig;
use crate::domain::{Activation, Outcome, TabId};
use crate::infrastructure::{
    create_extractor, create_notifier, create_page_clipboard, create_parser, ConfigFileAccess,
    ConsoleBadge, ParserShape, XdgConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Options for one clip run
pub struct ClipOptions {
    pub url: Option<String>,
    pub tab: u32,
}

/// Run one clip workflow against the given activation
pub async fn run_clip(options: ClipOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let shape: ParserShape = match config.parser_shape_or_default().parse() {
        Ok(shape) => shape,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Create adapters
    let extractor = create_extractor(&config.user_agent_or_default());
    let parser = create_parser(shape);
    let page_clipboard = create_page_clipboard();
    let badge = Arc::new(ConsoleBadge::new());
    let notifier = create_notifier(config.notify_or_default());
    let file_access = ConfigFileAccess::new(config);

    // Create use case
    let use_case = ClipPageUseCase::new(
        extractor,
        parser,
        page_clipboard,
        badge,
        notifier,
        file_access,
    );

    let tab_id = TabId(options.tab);
    let activation = match options.url {
        Some(url) => Activation::new(tab_id, url),
        None => Activation::without_url(tab_id),
    };

    // Execute; failures were already reported through the notifier
    match use_case.execute(activation).await {
        Outcome::Success => {
            presenter.success("Parsed assignments copied to clipboard");
            ExitCode::from(EXIT_SUCCESS)
        }
        _ => ExitCode::from(EXIT_ERROR),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        allow_file_urls: env_bool("LMS_CLIPPER_ALLOW_FILE_URLS"),
        parser_shape: env_string("LMS_CLIPPER_PARSER_SHAPE"),
        notify: None,
        user_agent: env_string("LMS_CLIPPER_USER_AGENT"),
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
    match env_string(name)?.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
