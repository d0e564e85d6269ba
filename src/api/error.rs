use std::io;
use std::path::PathBuf;

use rustpython_parser::ParseError;

use crate::diagnostic::Diagnostic;
use crate::simplify::SimplifyError;
use crate::span::{LineIndex, Span};

/// The parser rejected the source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("(line: {line}) {message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
}

impl SyntaxError {
    pub(crate) fn from_parse_error(err: ParseError, source: &str) -> Self {
        let offset = u32::from(err.offset);
        Self {
            message: err.error.to_string(),
            span: Span::at(offset),
            line: LineIndex::new(source).line_of(offset),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message.clone(), self.span)
            .with_note("the input is not valid source text".to_string())
    }
}

/// Any failure of the public entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("syntax error {0}")]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Simplify(#[from] SimplifyError),
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Syntax(err) => err.to_diagnostic(),
            Error::Simplify(err) => err.to_diagnostic(),
            Error::Io { .. } => Diagnostic::error(self.to_string(), Span::dummy()),
        }
    }

    /// The simplification failure, if that is what this is.
    pub fn as_simplify(&self) -> Option<&SimplifyError> {
        match self {
            Error::Simplify(err) => Some(err),
            _ => None,
        }
    }
}
