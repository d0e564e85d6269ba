use std::path::PathBuf;
use std::process;

use clap::Args;

use minidsl::config::{OutputFormat, SimplifyOptions};
use minidsl::ir::display::format_program;

use super::{fail, load_config, read_input};

#[derive(Args)]
pub struct SimplifyArgs {
    /// Input source file, or `-` for standard input
    pub input: PathBuf,
    /// Output format (default: from minidsl.toml, else text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Treat the input as a single expression
    #[arg(long)]
    pub expr: bool,
    /// Maximum nesting depth (overrides minidsl.toml)
    #[arg(long, value_name = "N", value_parser = SimplifyOptions::parse_max_depth)]
    pub max_depth: Option<usize>,
    /// Explicit minidsl.toml instead of searching ancestor directories
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn cmd_simplify(args: SimplifyArgs) {
    let SimplifyArgs {
        input,
        format,
        expr,
        max_depth,
        config,
    } = args;
    let input = read_input(&input);
    let config = load_config(&input, config.as_deref());

    let mut options = config.simplify;
    if let Some(depth) = max_depth {
        options.max_depth = depth;
    }
    let format = format.or(config.format).unwrap_or_default();

    let nodes = if expr {
        minidsl::simplify_expression_source(&input.source, &input.name, &options).map(|n| vec![n])
    } else {
        minidsl::simplify_source_with_options(&input.source, &input.name, &options)
    };
    let nodes = match nodes {
        Ok(nodes) => nodes,
        Err(e) => fail(&input, &e),
    };

    match format {
        OutputFormat::Text => print!("{}", format_program(&nodes)),
        OutputFormat::Json => match serde_json::to_string_pretty(&nodes) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot serialize output: {}", e);
                process::exit(1);
            }
        },
    }
}
