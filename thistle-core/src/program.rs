//! The parsed program: function table, imports, and parse diagnostics.
//!
//! `ProgramTree` is the final artifact the parser hands to the
//! validator. It holds no parser scratch state: the in-progress name,
//! signature and operand stack live on the parser's builder and are
//! discarded when parsing completes, so a `ProgramTree` is never
//! observed half-built.

use std::collections::HashMap;

use crate::ast::{Expr, Statement};
use crate::parser::ParseError;
use crate::span::Range;
use crate::types::{FunctionType, RecordType};

/// A finished function: signature plus body statements.
///
/// Created exactly once, at the closing brace of the body, and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionDefinition {
    pub signature: FunctionType,
    pub statements: Vec<Statement>,
    /// Range of the name token in the `fn` header, for diagnostics
    /// that point at the definition itself.
    pub name_range: Range,
}

/// Root artifact of parsing one source unit.
#[derive(Debug, Default)]
pub struct ProgramTree {
    pub module_name: String,
    pub imports: Vec<String>,

    // Insertion order of the tables is irrelevant.
    pub functions: HashMap<String, FunctionDefinition>,
    pub type_defs: HashMap<String, RecordType>,
    pub globals: HashMap<String, Expr>,

    pub errors: Vec<ParseError>,
    pub valid: bool,
    pub fatal: bool,
}

impl ProgramTree {
    pub(crate) fn new() -> ProgramTree {
        ProgramTree {
            valid: true,
            ..ProgramTree::default()
        }
    }

    /// Record a diagnostic. `valid` is false iff at least one
    /// diagnostic was ever emitted; a fatal one also halts the parse
    /// loop.
    pub(crate) fn emit(&mut self, err: ParseError) {
        self.valid = false;
        if err.is_fatal() {
            self.fatal = true;
        }
        self.errors.push(err);
    }

    /// Structural dump of the module for inspection: module name,
    /// import list, every function's signature and statements. Not a
    /// stable machine-readable format.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("module: {}\n", self.module_name));

        out.push_str("\nimports:\n");
        for import in &self.imports {
            out.push_str(&format!("  {import}\n"));
        }

        out.push_str("\nfunctions:\n");
        let mut names: Vec<&String> = self.functions.keys().collect();
        names.sort();
        for name in names {
            let function = &self.functions[name];
            out.push_str(&format!("  {name}: {}\n", function.signature));
            for statement in &function.statements {
                statement.dump_into(&mut out, 2);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Range;

    #[test]
    fn emitting_any_diagnostic_invalidates_the_tree() {
        let mut tree = ProgramTree::new();
        assert!(tree.valid);
        tree.emit(ParseError::TooManyExpressions {
            range: Range::default(),
        });
        assert!(!tree.valid);
        assert!(!tree.fatal);
    }

    #[test]
    fn fatal_diagnostics_imply_invalid() {
        let mut tree = ProgramTree::new();
        tree.emit(ParseError::FunctionNeedsName {
            range: Range::default(),
        });
        assert!(tree.fatal);
        assert!(!tree.valid);
    }
}
