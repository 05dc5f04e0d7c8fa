//! Core front end for the Thistle language.
//!
//! The pipeline is roughly:
//!
//!   source .th
//!     -> lexer     (tokens + lexical errors)
//!     -> parser    (ProgramTree + parse errors)
//!     -> validate  (scope/type checking)
//!
//! Higher-level tools (the CLI and anything after it) should depend on
//! this crate rather than reimplementing the pipeline; `frontend`
//! bundles the stages into one call.

// ---------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------

pub mod span;
pub mod diagnostic;

// ---------------------------------------------------------------------
// Front-end: lexing and parsing
// ---------------------------------------------------------------------

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod program;

// ---------------------------------------------------------------------
// Semantic layer: types, builtins, validation
// ---------------------------------------------------------------------

pub mod types;
pub mod builtins;
pub mod validate;

// ---------------------------------------------------------------------
// Pipeline orchestration and public API re-exports
// ---------------------------------------------------------------------

pub mod frontend;

pub use frontend::{Analysis, analyze};
