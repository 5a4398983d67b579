// folio CLI entry point.

use clap::Parser;

mod commands;
mod config;
mod exit_code;
mod output;

#[derive(Parser)]
#[command(name = "folio", about = "Markdown document analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = commands::run(cli.command) {
        exit_code::ExitCode::from_error(&error).exit();
    }
}
