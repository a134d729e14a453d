//! hostinfo - host label and attribute store
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use hostinfo::cli::commands::Target;
use hostinfo::cli::{Cli, Commands};
use hostinfo::config::{Config, ConfigManager};
use hostinfo::error::HostInfoResult;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> HostInfoResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);

    let target = Target {
        host: cli.host,
        store_dir: cli.store_dir,
    };

    match cli.command {
        Commands::Create(args) => hostinfo::cli::commands::create(args, &target, &config).await,
        Commands::Show(args) => hostinfo::cli::commands::show(args, &target, &config).await,
        Commands::Label(args) => hostinfo::cli::commands::label(args, &target, &config).await,
        Commands::Attr(args) => hostinfo::cli::commands::attr(args, &target, &config).await,
        Commands::Config(args) => {
            hostinfo::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr so stdout stays parseable
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("hostinfo=warn"),
        1 => EnvFilter::new("hostinfo=info"),
        _ => EnvFilter::new("hostinfo=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
