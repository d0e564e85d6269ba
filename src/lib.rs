pub mod api;
pub mod config;
pub mod diagnostic;
pub mod ir;
pub mod simplify;
pub mod span;

// Generic syntax tree produced by the external parser.
pub use rustpython_parser::ast;

// Public entry points: `minidsl::simplify_source()` etc.
pub use api::*;
