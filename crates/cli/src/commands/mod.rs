// CLI subcommand dispatch.

use clap::Subcommand;

pub mod diff;
pub mod lint;
pub mod outline;
pub mod stats;
pub mod summarize;

#[derive(Subcommand)]
pub enum Command {
    /// Show document statistics
    Stats(stats::StatsArgs),
    /// Show the heading outline
    Outline(outline::OutlineArgs),
    /// Compare two documents line by line
    Diff(diff::DiffArgs),
    /// Run the writing checks
    Lint(lint::LintArgs),
    /// Print a heading-based summary
    Summarize(summarize::SummarizeArgs),
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Stats(args) => stats::run(args),
        Command::Outline(args) => outline::run(args),
        Command::Diff(args) => diff::run(args),
        Command::Lint(args) => lint::run(args),
        Command::Summarize(args) => summarize::run(args),
    }
}
