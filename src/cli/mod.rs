pub mod check;
pub mod simplify;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use minidsl::config::Config;
use minidsl::diagnostic::{render_diagnostics, Diagnostic};

/// Source text read from a file or from standard input (`-`).
pub struct Input {
    /// Name used in reports: the path as given, or `<stdin>`.
    pub name: String,
    pub source: String,
    /// Directory searched for minidsl.toml.
    pub dir: PathBuf,
}

impl Input {
    pub fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == "-"
    }
}

/// Read the input, exiting on error.
pub fn read_input(path: &Path) -> Input {
    if Input::is_stdin(path) {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("error: cannot read standard input: {}", e);
            process::exit(1);
        }
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        return Input {
            name: "<stdin>".to_string(),
            source,
            dir,
        };
    }

    match std::fs::read_to_string(path) {
        Ok(source) => Input {
            name: path.to_string_lossy().to_string(),
            source,
            dir: path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf(),
        },
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Load the nearest minidsl.toml for `input`, or an explicit one. Exits on
/// error; warnings are printed and otherwise ignored.
pub fn load_config(input: &Input, explicit: Option<&Path>) -> Config {
    let result = match explicit {
        Some(path) => Config::load(path),
        None => Config::discover(&input.dir),
    };
    match result {
        Ok(config) => {
            report_config_warnings(&config);
            config
        }
        Err(e) => {
            eprintln!("error: {}", e.message);
            process::exit(1);
        }
    }
}

fn report_config_warnings(config: &Config) {
    let Some(path) = &config.path else {
        return;
    };
    let diagnostics: &[Diagnostic] = &config.warnings;
    if diagnostics.is_empty() {
        return;
    }
    let name = path.to_string_lossy();
    match std::fs::read_to_string(path) {
        Ok(source) => render_diagnostics(diagnostics, &name, &source),
        Err(_) => {
            for diag in diagnostics {
                eprintln!("warning: {}: {}", name, diag.message);
            }
        }
    }
}

/// Report a failed run against its source and exit.
pub fn fail(input: &Input, error: &minidsl::Error) -> ! {
    let diagnostic = error.to_diagnostic();
    if matches!(error, minidsl::Error::Io { .. }) {
        eprintln!("error: {}", diagnostic.message);
    } else {
        render_diagnostics(&[diagnostic], &input.name, &input.source);
    }
    log::debug!("{}: {}", input.name, error);
    process::exit(1);
}
