mod error;

use std::path::Path;

use rustpython_parser::{ast, Parse};

use crate::config::SimplifyOptions;
use crate::ir::Node;
use crate::simplify::{SimplifyError, Simplifier};

pub use self::error::{Error, SyntaxError};

/// Parse source text into a statement list with the external parser.
pub fn parse(source: &str, filename: &str) -> Result<ast::Suite, SyntaxError> {
    ast::Suite::parse(source, filename).map_err(|e| SyntaxError::from_parse_error(e, source))
}

/// Parse source text holding a single expression.
pub fn parse_expression(source: &str, filename: &str) -> Result<ast::Expr, SyntaxError> {
    ast::Expr::parse(source, filename).map_err(|e| SyntaxError::from_parse_error(e, source))
}

/// Simplify an already parsed statement list. Errors carry no line numbers,
/// since the source text is unknown here.
pub fn simplify(body: &[ast::Stmt]) -> Result<Vec<Node>, SimplifyError> {
    Simplifier::new().simplify_suite(body)
}

/// Parse and simplify source text.
pub fn simplify_source(source: &str, filename: &str) -> Result<Vec<Node>, Error> {
    simplify_source_with_options(source, filename, &SimplifyOptions::default())
}

/// Parse and simplify source text with options.
pub fn simplify_source_with_options(
    source: &str,
    filename: &str,
    options: &SimplifyOptions,
) -> Result<Vec<Node>, Error> {
    log::debug!("simplifying {} ({} bytes)", filename, source.len());
    let suite = parse(source, filename)?;
    let nodes = Simplifier::new()
        .with_options(*options)
        .with_source(source)
        .simplify_suite(&suite)?;
    log::debug!("{}: {} top-level nodes", filename, nodes.len());
    Ok(nodes)
}

/// Parse and simplify source text holding a single expression.
pub fn simplify_expression_source(
    source: &str,
    filename: &str,
    options: &SimplifyOptions,
) -> Result<Node, Error> {
    log::debug!("simplifying expression {}", filename);
    let expr = parse_expression(source, filename)?;
    let node = Simplifier::new()
        .with_options(*options)
        .with_source(source)
        .simplify_expr(&expr)?;
    Ok(node)
}

/// Read, parse and simplify a source file.
pub fn simplify_file(path: &Path, options: &SimplifyOptions) -> Result<Vec<Node>, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    simplify_source_with_options(&source, &path.to_string_lossy(), options)
}
