//! LmsClipper CLI entry point

use std::process::ExitCode;

use clap::Parser;

use lms_clipper::cli::{
    app::{load_merged_config, run_clip, ClipOptions, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use lms_clipper::domain::config::AppConfig;
use lms_clipper::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        allow_file_urls: if cli.allow_file_urls { Some(true) } else { None },
        parser_shape: cli.parser_shape.clone(),
        notify: if cli.notify {
            Some(true)
        } else if cli.quiet {
            Some(false)
        } else {
            None
        },
        user_agent: cli.user_agent.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = ClipOptions {
        url: cli.url,
        tab: cli.tab,
    };

    run_clip(options, config).await
}
