//! Pipeline orchestration: source text in, analyzed program out.
//!
//! The stages run strictly in order. Validation only runs on a clean
//! parse: lexical or syntactic errors leave `validation` as `None`,
//! so semantic diagnostics never pile on top of a broken tree.

use crate::diagnostic::render;
use crate::lexer::{LexResult, lex};
use crate::parser::parse;
use crate::program::ProgramTree;
use crate::validate::{ValidationOutcome, validate};

/// Everything the front end produced for one source unit.
#[derive(Debug)]
pub struct Analysis {
    pub lexed: LexResult,
    pub tree: ProgramTree,
    /// Present only when the parse produced a usable tree.
    pub validation: Option<ValidationOutcome>,
}

impl Analysis {
    /// True when no stage recorded an error.
    pub fn is_valid(&self) -> bool {
        self.lexed.errors.is_empty()
            && self.tree.valid
            && self.validation.as_ref().is_some_and(|v| v.valid)
    }

    /// All diagnostics rendered against the source, in pipeline order.
    pub fn render_diagnostics(&self, source: &str) -> Vec<String> {
        let mut rendered = Vec::new();
        for err in &self.lexed.errors {
            rendered.push(render(source, err));
        }
        for err in &self.tree.errors {
            rendered.push(render(source, err));
        }
        if let Some(validation) = &self.validation {
            for err in &validation.errors {
                rendered.push(render(source, err));
            }
        }
        rendered
    }
}

/// Run the whole front end over one source unit.
pub fn analyze(source: &str) -> Analysis {
    let lexed = lex(source);
    let tree = parse(&lexed);
    let validation = if lexed.errors.is_empty() && tree.valid {
        Some(validate(&tree))
    } else {
        None
    };
    Analysis {
        lexed,
        tree,
        validation,
    }
}
