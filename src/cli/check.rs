use std::path::PathBuf;

use clap::Args;

use super::{fail, load_config, read_input};

#[derive(Args)]
pub struct CheckArgs {
    /// Input source file, or `-` for standard input
    pub input: PathBuf,
    /// Explicit minidsl.toml instead of searching ancestor directories
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Report whether the input stays within the supported subset.
pub fn cmd_check(args: CheckArgs) {
    let CheckArgs { input, config } = args;
    let input = read_input(&input);
    let config = load_config(&input, config.as_deref());

    match minidsl::simplify_source_with_options(&input.source, &input.name, &config.simplify) {
        Ok(nodes) => eprintln!("OK: {} ({} top-level nodes)", input.name, nodes.len()),
        Err(e) => fail(&input, &e),
    }
}
