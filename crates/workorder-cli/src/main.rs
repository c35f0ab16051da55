mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;
use workorder_core::AppConfig;
use workorder_tui::App;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("WORKORDER_DEBUG_LOG") {
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
    let file = AppConfig::load().resolve_file(cli.file);

    match cli.command {
        None => {
            let mut app = App::new(file.map(PathBuf::from));
            app.run()?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "workorder", &mut std::io::stdout());
        }
        Some(cmd) => {
            if let Err(e) = run_command(file, cmd) {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

fn run_command(file: Option<String>, cmd: Commands) -> anyhow::Result<()> {
    let file_path = file.ok_or_else(|| anyhow::anyhow!("--file is required for CLI operations"))?;

    match cmd {
        Commands::Create(args) => handlers::order::handle_create(&file_path, args),
        Commands::Show => handlers::order::handle_show(&CliContext::load(&file_path)?),
        Commands::Order(order_cmd) => {
            let mut ctx = CliContext::load(&file_path)?;
            handlers::order::handle(&mut ctx, order_cmd.action)
        }
        Commands::Room(room_cmd) => {
            let mut ctx = CliContext::load(&file_path)?;
            handlers::room::handle(&mut ctx, room_cmd.action)
        }
        Commands::Completions { .. } => Ok(()),
    }
}
