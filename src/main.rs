mod cli;

use clap::{Parser, Subcommand};

use cli::check::CheckArgs;
use cli::simplify::SimplifyArgs;

#[derive(Parser)]
#[command(
    name = "minidsl",
    version,
    about = "Simplify Python source into a compact intermediate representation"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the simplified program
    Simplify(SimplifyArgs),
    /// Check that the input is within the supported subset
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match cli.command {
        Command::Simplify(args) => cli::simplify::cmd_simplify(args),
        Command::Check(args) => cli::check::cmd_check(args),
    }
}
