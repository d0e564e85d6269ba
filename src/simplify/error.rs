use std::fmt;

use super::kind::NodeKind;
use crate::diagnostic::Diagnostic;
use crate::span::Span;

/// Why a generic tree could not be simplified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A recognized construct the IR intentionally does not express.
    UnsupportedConstruct,
    /// A tree shape the traversal cannot reduce.
    MalformedInput,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnsupportedConstruct => "unsupported construct",
            ErrorKind::MalformedInput => "malformed input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simplification failure, reported at the node that could not be reduced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("({}) {message}", self.location())]
pub struct SimplifyError {
    pub kind: ErrorKind,
    pub node: NodeKind,
    pub span: Span,
    /// 1-based line, when the source text was available.
    pub line: Option<usize>,
    pub message: String,
}

impl SimplifyError {
    pub fn unsupported(node: NodeKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnsupportedConstruct,
            node,
            span,
            line: None,
            message: message.into(),
        }
    }

    pub fn malformed(node: NodeKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            node,
            span,
            line: None,
            message: message.into(),
        }
    }

    /// Rejection of a whole node kind the simplifier does not reduce.
    pub fn unsupported_kind(node: NodeKind, span: Span) -> Self {
        debug_assert!(!node.is_supported(), "{} is reduced, not rejected", node);
        Self::unsupported(node, span, format!("{} is not supported", node.describe()))
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind == ErrorKind::UnsupportedConstruct
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message.clone(), self.span)
            .with_note(format!("{} in `{}` node", self.kind, self.node))
    }

    fn location(&self) -> String {
        match self.line {
            Some(line) => format!("node: {}, line: {}", self.node, line),
            None => format!("node: {}", self.node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let err = SimplifyError::unsupported(
            NodeKind::Compare,
            Span::new(3, 12),
            "chained comparison is not supported",
        )
        .with_line(3);
        assert_eq!(
            err.to_string(),
            "(node: Compare, line: 3) chained comparison is not supported"
        );
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_display_without_line() {
        let err = SimplifyError::malformed(NodeKind::BoolOp, Span::dummy(), "empty boolean chain");
        assert_eq!(err.to_string(), "(node: BoolOp) empty boolean chain");
        assert!(!err.is_unsupported());
        let err: &dyn std::error::Error = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_unsupported_kind_message() {
        let err = SimplifyError::unsupported_kind(NodeKind::ListComp, Span::new(0, 9));
        assert_eq!(err.message, "comprehension is not supported");
        assert_eq!(err.node, NodeKind::ListComp);
    }

    #[test]
    fn test_to_diagnostic() {
        let err = SimplifyError::unsupported_kind(NodeKind::Attribute, Span::new(4, 7));
        let d = err.to_diagnostic();
        assert_eq!(d.message, "attribute access is not supported");
        assert_eq!(d.span, Span::new(4, 7));
        assert_eq!(d.notes, vec!["unsupported construct in `Attribute` node".to_string()]);
    }
}
