use anyhow::Result;
use clap::Parser;
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use helpdesk::app::App;
use helpdesk::cli::{Cli, Commands};
use helpdesk::commands;
use helpdesk::config::Config;
use helpdesk::shell;

const LOG_ENV: &str = "HELPDESK_LOG";

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout belongs to command output.
    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
    if let Err(err) = result {
        eprintln!("Failed to initialize logging: {}", err);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let cwd = env::current_dir()?;
    if let Commands::Init = cli.command {
        return commands::init::run(&cwd);
    }

    let config = Config::resolve(&cwd, cli.data_dir.as_deref(), cli.latency_ms)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Resolved configuration");
    let mut app = App::open(&config)?;

    match cli.command {
        Commands::Shell => {
            let summary = shell::run(&mut app).await?;
            if summary.failed > 0 {
                tracing::info!(failed = summary.failed, "Some shell commands failed");
            }
            Ok(())
        }
        command => commands::dispatch(&mut app, command).await,
    }
}
