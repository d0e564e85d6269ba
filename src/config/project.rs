use std::path::{Path, PathBuf};

use super::{OutputFormat, SimplifyOptions};
use crate::diagnostic::Diagnostic;
use crate::span::Span;

pub const CONFIG_FILE: &str = "minidsl.toml";

/// Project settings from minidsl.toml. Every field is optional in the file.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub simplify: SimplifyOptions,
    /// Output format; `None` leaves the choice to the command line.
    pub format: Option<OutputFormat>,
    /// Where the settings were read from.
    pub path: Option<PathBuf>,
    /// Keys that were present but not understood.
    pub warnings: Vec<Diagnostic>,
}

impl Config {
    /// Load settings from a minidsl.toml file.
    pub fn load(toml_path: &Path) -> Result<Config, Diagnostic> {
        let content = std::fs::read_to_string(toml_path).map_err(|e| {
            Diagnostic::error(
                format!("cannot read '{}': {}", toml_path.display(), e),
                Span::dummy(),
            )
        })?;
        let mut config = Config::parse(&content)?;
        config.path = Some(toml_path.to_path_buf());
        log::debug!("loaded {}", toml_path.display());
        Ok(config)
    }

    /// Parse the minimal TOML subset minidsl.toml uses.
    pub fn parse(content: &str) -> Result<Config, Diagnostic> {
        let mut config = Config::default();
        let mut current_section = String::new();
        let mut offset = 0u32;

        for line in content.lines() {
            let span = Span::new(offset, offset + line.len() as u32);
            offset += line.len() as u32 + 1;

            let trimmed = strip_comment(line).trim();
            if trimmed.is_empty() {
                continue;
            }
            // Section headers: [simplify], [output]
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(Diagnostic::error(
                    format!("expected `key = value` in {}", CONFIG_FILE),
                    span,
                ));
            };
            let key = key.trim().trim_matches('"');
            let value = value.trim();

            match (current_section.as_str(), key) {
                ("simplify", "max_depth") => {
                    config.simplify.max_depth = SimplifyOptions::parse_max_depth(value)
                        .map_err(|help| {
                            Diagnostic::error(format!("invalid max_depth '{}'", value), span)
                                .with_help(help)
                        })?;
                }
                ("output", "format") => {
                    let format = value
                        .trim_matches('"')
                        .parse::<OutputFormat>()
                        .map_err(|msg| Diagnostic::error(msg, span))?;
                    config.format = Some(format);
                }
                (section, key) => {
                    config.warnings.push(Diagnostic::warning(
                        format!("unknown key `{}` in section [{}]", key, section),
                        span,
                    ));
                }
            }
        }

        Ok(config)
    }

    /// Try to find a minidsl.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Settings for an input under `start_dir`: the nearest minidsl.toml,
    /// or defaults when there is none.
    pub fn discover(start_dir: &Path) -> Result<Config, Diagnostic> {
        match Config::find(start_dir) {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }
}

/// Drop a trailing `# comment` that is not inside a string.
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}
