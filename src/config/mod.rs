//! Simplifier options and the optional `minidsl.toml` project file.

pub mod project;

use std::fmt;
use std::str::FromStr;

pub use self::project::Config;

/// Limits applied to a single traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Deepest nesting of generic nodes the traversal will enter.
    pub max_depth: usize,
}

impl SimplifyOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Parse a positive nesting limit.
    pub fn parse_max_depth(value: &str) -> Result<usize, String> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|depth| *depth > 0)
            .ok_or_else(|| format!("expected a positive integer, got '{}'", value.trim()))
    }
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// How the CLI prints a simplified program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical indented text.
    #[default]
    Text,
    /// The IR serialized as JSON.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected \"text\" or \"json\")",
                other
            )),
        }
    }
}
