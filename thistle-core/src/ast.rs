//! Abstract syntax for Thistle programs.
//!
//! Expressions and statements are closed sum types so every consumer
//! (dumper, type evaluator, validator) matches exhaustively and a new
//! language feature forces every consumer to be updated deliberately.

use core::fmt;

use crate::span::Range;

/// A possibly-qualified dotted name such as `std.println`.
///
/// The segment list is never empty. Equality and scope lookup go
/// through the dot-joined string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub names: Vec<String>,
    pub range: Range,
}

impl FullName {
    pub fn single(name: impl Into<String>, range: Range) -> FullName {
        FullName {
            names: vec![name.into()],
            range,
        }
    }

    /// Rebuild a `FullName` from a scope key (`"std.println"`).
    /// Keys carry no source position.
    pub fn from_key(key: &str) -> FullName {
        FullName {
            names: key.split('.').map(str::to_string).collect(),
            range: Range::default(),
        }
    }

    /// Append one segment, widening the range to cover it.
    pub fn push_segment(&mut self, name: impl Into<String>, range: Range) {
        self.names.push(name.into());
        self.range = self.range.union(range);
    }

    /// The dot-joined string form used for scope lookup. Resolution is
    /// always on the complete joined string, never a partial match.
    pub fn joined(&self) -> String {
        self.names.join(".")
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// What kind of name a lookup expects to find, for more specific
/// resolution-failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Unspecified,
    Variable,
    Function,
    Type,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupKind::Unspecified => "name",
            LookupKind::Variable => "variable",
            LookupKind::Function => "function",
            LookupKind::Type => "type",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Boolean,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Number => "number",
            LiteralKind::String => "string",
            LiteralKind::Boolean => "boolean",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    /// Raw token text; string literals keep their quotes.
    pub text: String,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLookup {
    pub name: FullName,
    pub looking_for: LookupKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: FullName,
    pub args: Vec<Expr>,
    /// False while the call is still collecting arguments on the
    /// parser's operand stack; true once its closing paren was seen.
    pub closed: bool,
    pub range: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Plus,
    Minus,
    Times,
    Divide,
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InfixOp::Plus => "+",
            InfixOp::Minus => "-",
            InfixOp::Times => "*",
            InfixOp::Divide => "/",
        })
    }
}

/// Infix expressions are modeled but never produced by the parser;
/// operator-precedence parsing is a non-goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpr {
    pub op: InfixOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(LiteralExpr),
    Name(NameLookup),
    Call(FunctionCall),
    Infix(InfixExpr),
}

impl Expr {
    /// Source range of this node. A parent's range always covers
    /// every child's range.
    pub fn range(&self) -> Range {
        match self {
            Expr::Literal(lit) => lit.range,
            Expr::Name(name) => name.name.range,
            Expr::Call(call) => call.range,
            Expr::Infix(infix) => infix.lhs.range().union(infix.rhs.range()),
        }
    }

    pub(crate) fn dump_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Expr::Literal(lit) => {
                out.push_str(&format!("{pad}literal {} {}\n", lit.kind, lit.text));
            }
            Expr::Name(name) => {
                out.push_str(&format!("{pad}name {}\n", name.name));
            }
            Expr::Call(call) => {
                out.push_str(&format!("{pad}call {}\n", call.name));
                for arg in &call.args {
                    arg.dump_into(out, depth + 1);
                }
            }
            Expr::Infix(infix) => {
                out.push_str(&format!("{pad}infix {}\n", infix.op));
                infix.lhs.dump_into(out, depth + 1);
                infix.rhs.dump_into(out, depth + 1);
            }
        }
    }
}

/// Statements of a function body. `Assignment` is modeled but not yet
/// produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expr),
    Standalone(Expr),
    Assignment { target: String, value: Expr },
}

impl Statement {
    pub(crate) fn dump_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Statement::Return(value) => {
                out.push_str(&format!("{pad}return\n"));
                value.dump_into(out, depth + 1);
            }
            Statement::Standalone(expr) => {
                out.push_str(&format!("{pad}expr\n"));
                expr.dump_into(out, depth + 1);
            }
            Statement::Assignment { target, value } => {
                out.push_str(&format!("{pad}assign {target}\n"));
                value.dump_into(out, depth + 1);
            }
        }
    }
}
