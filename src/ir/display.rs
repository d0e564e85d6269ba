//! Canonical text rendering of IR nodes.
//!
//! This module is the single source of truth for turning IR into text: the
//! CLI prints it, and tests compare against it.

use std::fmt::{self, Write};

use super::{Keyword, Literal, Node, Reserved};

const INDENT: &str = "    ";

/// Render a top-level sequence, one statement per line.
pub fn format_program(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        // Writing into a String cannot fail.
        let _ = write_stmt(&mut out, node, 0);
    }
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_block() {
            let mut out = String::new();
            write_stmt(&mut out, self, 0)?;
            return f.write_str(out.trim_end_matches('\n'));
        }
        write_inline(f, self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Str(s) => write!(f, "{:?}", s),
            Literal::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
        }
    }
}

impl fmt::Display for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for super::Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl Node {
    fn is_block(&self) -> bool {
        matches!(self, Node::If { .. } | Node::For { .. } | Node::While { .. })
    }
}

fn write_inline<W: Write>(w: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Literal(lit) => write!(w, "{}", lit),
        Node::Reference(name) => w.write_str(name),
        Node::Reserved(r) => w.write_str(r.name()),
        Node::Operation { op, args } => {
            write!(w, "{}(", op.name())?;
            write_list(w, args)?;
            w.write_char(')')
        }
        Node::Assignment { name, value } => {
            write!(w, "{} = ", name)?;
            write_inline(w, value)
        }
        Node::Call {
            callee,
            args,
            kwargs,
        } => {
            write_inline(w, callee)?;
            w.write_char('(')?;
            write_list(w, args)?;
            for (i, kw) in kwargs.iter().enumerate() {
                if i > 0 || !args.is_empty() {
                    w.write_str(", ")?;
                }
                write!(w, "{}=", kw.name)?;
                write_inline(w, &kw.value)?;
            }
            w.write_char(')')
        }
        Node::Return(value) => {
            w.write_str("return ")?;
            write_inline(w, value)
        }
        Node::Tuple(elts) => {
            w.write_char('(')?;
            write_list(w, elts)?;
            if elts.len() == 1 {
                w.write_char(',')?;
            }
            w.write_char(')')
        }
        Node::List(elts) => {
            w.write_char('[')?;
            write_list(w, elts)?;
            w.write_char(']')
        }
        Node::Set(elts) if elts.is_empty() => w.write_str("set()"),
        Node::Set(elts) => {
            w.write_char('{')?;
            write_list(w, elts)?;
            w.write_char('}')
        }
        Node::Mapping(map) => {
            w.write_char('{')?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write_inline(w, key)?;
                w.write_str(": ")?;
                write_inline(w, value)?;
            }
            w.write_char('}')
        }
        // Blocks in expression position only come from hand-built trees.
        Node::If { test, .. } => write!(w, "<if {}>", test),
        Node::For { target, iter, .. } => write!(w, "<for {} in {}>", target, iter),
        Node::While { test, .. } => write!(w, "<while {}>", test),
    }
}

fn write_list<'a, W: Write>(w: &mut W, nodes: impl IntoIterator<Item = &'a Node>) -> fmt::Result {
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write_inline(w, node)?;
    }
    Ok(())
}

fn write_indent<W: Write>(w: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        w.write_str(INDENT)?;
    }
    Ok(())
}

fn write_body<W: Write>(w: &mut W, body: &[Node], depth: usize) -> fmt::Result {
    for stmt in body {
        write_stmt(w, stmt, depth)?;
    }
    Ok(())
}

fn write_stmt<W: Write>(w: &mut W, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::If { .. } => {
            write_indent(w, depth)?;
            write_if_chain(w, node, depth)
        }
        Node::For { target, iter, body } => {
            write_indent(w, depth)?;
            write!(w, "for {} in ", target)?;
            write_inline(w, iter)?;
            w.write_str(":\n")?;
            write_body(w, body, depth + 1)
        }
        Node::While { test, body } => {
            write_indent(w, depth)?;
            w.write_str("while ")?;
            write_inline(w, test)?;
            w.write_str(":\n")?;
            write_body(w, body, depth + 1)
        }
        _ => {
            write_indent(w, depth)?;
            write_inline(w, node)?;
            w.write_char('\n')
        }
    }
}

/// `if` / `elif` / `else`; the indent for the first keyword is already written.
fn write_if_chain<W: Write>(w: &mut W, node: &Node, depth: usize) -> fmt::Result {
    let Node::If { test, body, orelse } = node else {
        return write_stmt(w, node, depth);
    };
    w.write_str("if ")?;
    write_inline(w, test)?;
    w.write_str(":\n")?;
    write_body(w, body, depth + 1)?;

    match orelse.as_slice() {
        [] => Ok(()),
        [nested @ Node::If { .. }] => {
            write_indent(w, depth)?;
            w.write_str("el")?;
            write_if_chain(w, nested, depth)
        }
        stmts => {
            write_indent(w, depth)?;
            w.write_str("else:\n")?;
            write_body(w, stmts, depth + 1)
        }
    }
}
