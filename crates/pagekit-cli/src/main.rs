mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PAGEKIT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let json = cli.json;

    let result = CliContext::load(cli.config.as_deref(), json).and_then(|ctx| match cli.command {
        Commands::Range(args) => handlers::range::handle(&ctx, args),
        Commands::Info(args) => handlers::info::handle(&ctx, args),
        Commands::Walk(args) => handlers::walk::handle(&ctx, args),
    });

    if let Err(e) = result {
        output::output_error(&e.to_string(), json);
    }
    Ok(())
}
