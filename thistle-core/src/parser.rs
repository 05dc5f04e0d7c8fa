//! Token-driven parser for Thistle.
//!
//! A pushdown automaton written as an explicit [`State`] enum plus a
//! transition function keyed on (state, token kind). The continuation
//! that threads a finished expression back into its statement is the
//! inspectable [`ExprSink`] value; in-progress sub-expressions live on
//! an explicit operand stack. Fatal diagnostics halt the parse loop
//! immediately; recoverable ones skip to a resynchronization point
//! (usually end of line) and resume top-level dispatch.

use std::mem;

use thiserror::Error;

use crate::ast::{
    Expr, FullName, FunctionCall, LiteralExpr, LiteralKind, LookupKind, NameLookup, Statement,
};
use crate::diagnostic::SourceDiagnostic;
use crate::lexer::{LexResult, Token, TokenKind};
use crate::program::{FunctionDefinition, ProgramTree};
use crate::span::Range;
use crate::types::{BuiltinKind, NamedType, Type};

/// Parse diagnostics. Fatal variants halt the whole parse; recoverable
/// ones are recorded and parsing resumes at a safe point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // Fatal: the parser has no reliable resynchronization point.
    #[error("function needs a name")]
    FunctionNeedsName { range: Range },

    #[error("function needs an opening paren, like `fn foo()`")]
    FunctionNeedsOpenParen { range: Range },

    #[error("unexpected token in parameter list")]
    UnexpectedInParameterList { range: Range },

    #[error("unexpected token in return header")]
    UnexpectedInReturnHeader { range: Range },

    #[error("this statement form is not implemented yet")]
    Unimplemented { range: Range },

    #[error("closing paren without an open function call")]
    ExtraneousClosingParen { range: Range },

    // Recoverable: skip to end of line and resume.
    #[error("expected a parameter name, like `fn foo(name: type)`")]
    ExpectedParamName { range: Range },

    #[error("a type must be a name, like `fn foo(a: Baz)`")]
    TypeMustBeAName { range: Range },

    #[error("expected end of line: {reason}")]
    ExpectedEndOfLine { reason: &'static str, range: Range },

    #[error("import needs a name, like `import \"std\"`")]
    ImportNeedsName { range: Range },

    #[error("an import name must be a string literal, like `import \"std\"`")]
    ImportMustBeString { range: Range },

    #[error("module needs a name; if this is the main module try `module main`")]
    ModuleNeedsName { range: Range },

    #[error("a module name must be a word, not a number or other symbol")]
    ModuleNameMustBeWord { range: Range },

    #[error("multiple definitions of module: a module can only have one name")]
    MultipleModuleDefinitions { range: Range },

    #[error("dotted name stopped after `.`")]
    UnfinishedFullName { range: Range },

    #[error("line ended with more than one expression")]
    TooManyExpressions { range: Range },
}

impl ParseError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::FunctionNeedsName { .. }
                | ParseError::FunctionNeedsOpenParen { .. }
                | ParseError::UnexpectedInParameterList { .. }
                | ParseError::UnexpectedInReturnHeader { .. }
                | ParseError::Unimplemented { .. }
                | ParseError::ExtraneousClosingParen { .. }
        )
    }
}

impl SourceDiagnostic for ParseError {
    fn range(&self) -> Option<Range> {
        match self {
            ParseError::FunctionNeedsName { range }
            | ParseError::FunctionNeedsOpenParen { range }
            | ParseError::UnexpectedInParameterList { range }
            | ParseError::UnexpectedInReturnHeader { range }
            | ParseError::Unimplemented { range }
            | ParseError::ExtraneousClosingParen { range }
            | ParseError::ExpectedParamName { range }
            | ParseError::TypeMustBeAName { range }
            | ParseError::ExpectedEndOfLine { range, .. }
            | ParseError::ImportNeedsName { range }
            | ParseError::ImportMustBeString { range }
            | ParseError::ModuleNeedsName { range }
            | ParseError::ModuleNameMustBeWord { range }
            | ParseError::MultipleModuleDefinitions { range }
            | ParseError::UnfinishedFullName { range }
            | ParseError::TooManyExpressions { range } => Some(*range),
        }
    }
}

/// Where a finished statement-level expression goes.
///
/// This is the only continuation the expression sub-automaton needs to
/// keep: intermediate "collect the next argument" continuations are
/// pushes onto the operand stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprSink {
    ReturnValue,
    Standalone,
}

/// Which slot a just-parsed type belongs to.
#[derive(Debug, Clone, Copy)]
enum TypeTarget {
    LastParam,
    ReturnType,
}

/// Where control resumes after a type was parsed.
#[derive(Debug, Clone, Copy)]
enum AfterType {
    ParamListContinue,
    BodyOpenCurly,
}

/// Parser state. `Finding` is top-level dispatch; each sub-construct
/// returns to it when finished.
#[derive(Debug)]
enum State {
    Finding,
    ModuleName,
    ImportName,
    EnsureEol { reason: &'static str },
    SkipLine,

    FnName,
    SigOpenParen,
    ParamName,
    ParamTypeOrEnd,
    ParamListContinue,
    ReturnTypeOrBody,
    BodyOpenCurly,
    Statements,
    ParseType { target: TypeTarget, after: AfterType },

    Expr { sink: ExprSink },
    NameOrCall { name: FullName, sink: ExprSink },
    GrowName { name: FullName, sink: ExprSink },
    ExprContinue { sink: ExprSink },
}

/// Parse a token stream into a [`ProgramTree`].
///
/// Lexical errors are unconditionally fatal to the whole parse: when
/// the lex result carries any, the tree is marked invalid and no token
/// is consumed.
pub fn parse(lexed: &LexResult) -> ProgramTree {
    let mut parser = Parser::new();

    if !lexed.errors.is_empty() {
        parser.tree.valid = false;
        return parser.tree;
    }

    let mut state = State::Finding;
    for tok in &lexed.tokens {
        if parser.tree.fatal {
            break;
        }
        state = parser.step(state, tok);
    }
    parser.tree
}

/// Builder owning the tree under construction plus all transient
/// scratch state. Dropped once parsing completes, so scratch is never
/// exposed to the validator.
struct Parser {
    tree: ProgramTree,
    working_name: String,
    working_function: FunctionDefinition,
    operands: Vec<Expr>,
}

impl Parser {
    fn new() -> Parser {
        Parser {
            tree: ProgramTree::new(),
            working_name: String::new(),
            working_function: FunctionDefinition::default(),
            operands: Vec::new(),
        }
    }

    fn emit(&mut self, err: ParseError) {
        self.tree.emit(err);
    }

    /// The transition function. Some transitions re-dispatch the same
    /// token to the successor state (a finished name or expression is
    /// delimited by the token that follows it).
    fn step(&mut self, state: State, tok: &Token) -> State {
        match state {
            State::Finding => match tok.kind {
                TokenKind::Module => State::ModuleName,
                TokenKind::Import => State::ImportName,
                TokenKind::Fn => State::FnName,
                _ => State::Finding,
            },

            State::ModuleName => {
                if !self.tree.module_name.is_empty() {
                    self.emit(ParseError::MultipleModuleDefinitions { range: tok.range });
                    return State::SkipLine;
                }
                match tok.kind {
                    TokenKind::Newline => {
                        self.emit(ParseError::ModuleNeedsName { range: tok.range });
                        State::Finding
                    }
                    TokenKind::Symbol => {
                        self.tree.module_name = tok.text.clone();
                        State::EnsureEol {
                            reason: "the name of a module must end the line",
                        }
                    }
                    _ => {
                        self.emit(ParseError::ModuleNameMustBeWord { range: tok.range });
                        State::SkipLine
                    }
                }
            }

            State::ImportName => match tok.kind {
                TokenKind::Newline => {
                    self.emit(ParseError::ImportNeedsName { range: tok.range });
                    State::Finding
                }
                TokenKind::StringLiteral => {
                    self.tree.imports.push(strip_quotes(&tok.text));
                    State::EnsureEol {
                        reason: "the name of an import must end the line",
                    }
                }
                _ => {
                    self.emit(ParseError::ImportMustBeString { range: tok.range });
                    State::SkipLine
                }
            },

            State::EnsureEol { reason } => {
                if tok.kind != TokenKind::Newline {
                    self.emit(ParseError::ExpectedEndOfLine {
                        reason,
                        range: tok.range,
                    });
                    return State::SkipLine;
                }
                State::Finding
            }

            State::SkipLine => {
                if tok.kind == TokenKind::Newline {
                    State::Finding
                } else {
                    State::SkipLine
                }
            }

            State::FnName => {
                if tok.kind != TokenKind::Symbol {
                    self.emit(ParseError::FunctionNeedsName { range: tok.range });
                    return State::Finding;
                }
                self.working_name = tok.text.clone();
                self.working_function = FunctionDefinition::default();
                self.working_function.name_range = tok.range;
                State::SigOpenParen
            }

            State::SigOpenParen => {
                if tok.kind != TokenKind::LParen {
                    self.emit(ParseError::FunctionNeedsOpenParen { range: tok.range });
                }
                State::ParamName
            }

            State::ParamName => {
                if tok.kind == TokenKind::RParen {
                    // foo()
                    return State::ReturnTypeOrBody;
                }
                if tok.kind != TokenKind::Symbol {
                    self.emit(ParseError::ExpectedParamName { range: tok.range });
                }
                self.working_function.signature.params.push(NamedType {
                    name: tok.text.clone(),
                    ty: None,
                });
                State::ParamTypeOrEnd
            }

            State::ParamTypeOrEnd => match tok.kind {
                TokenKind::Comma => State::ParamName,
                TokenKind::Colon => State::ParseType {
                    target: TypeTarget::LastParam,
                    after: AfterType::ParamListContinue,
                },
                TokenKind::RParen => State::ReturnTypeOrBody,
                _ => {
                    self.emit(ParseError::UnexpectedInParameterList { range: tok.range });
                    State::Finding
                }
            },

            State::ParamListContinue => match tok.kind {
                TokenKind::Comma => State::ParamName,
                TokenKind::RParen => State::ReturnTypeOrBody,
                _ => {
                    self.emit(ParseError::UnexpectedInParameterList { range: tok.range });
                    State::Finding
                }
            },

            State::ParseType { target, after } => {
                let ty = if tok.kind != TokenKind::Symbol {
                    self.emit(ParseError::TypeMustBeAName { range: tok.range });
                    Type::Builtin(BuiltinKind::Unknown)
                } else if let Some(kind) = BuiltinKind::from_name(&tok.text) {
                    Type::Builtin(kind)
                } else {
                    Type::Name(tok.text.clone())
                };
                match target {
                    TypeTarget::LastParam => {
                        if let Some(param) = self.working_function.signature.params.last_mut() {
                            param.ty = Some(ty);
                        }
                    }
                    TypeTarget::ReturnType => {
                        self.working_function.signature.return_type = Some(Box::new(ty));
                    }
                }
                match after {
                    AfterType::ParamListContinue => State::ParamListContinue,
                    AfterType::BodyOpenCurly => State::BodyOpenCurly,
                }
            }

            State::ReturnTypeOrBody => match tok.kind {
                TokenKind::Arrow => State::ParseType {
                    target: TypeTarget::ReturnType,
                    after: AfterType::BodyOpenCurly,
                },
                TokenKind::LBrace => State::Statements,
                _ => {
                    self.emit(ParseError::UnexpectedInReturnHeader { range: tok.range });
                    State::Finding
                }
            },

            State::BodyOpenCurly => {
                if tok.kind == TokenKind::LBrace {
                    return State::Statements;
                }
                self.emit(ParseError::UnexpectedInReturnHeader { range: tok.range });
                State::Finding
            }

            State::Statements => match tok.kind {
                TokenKind::RBrace => {
                    // The closing brace finalizes the definition; it is
                    // stored by name and never mutated afterward.
                    let name = mem::take(&mut self.working_name);
                    let finished = mem::take(&mut self.working_function);
                    self.tree.functions.insert(name, finished);
                    State::Finding
                }
                TokenKind::Return => State::Expr {
                    sink: ExprSink::ReturnValue,
                },
                TokenKind::Newline => State::Statements,
                TokenKind::Symbol => {
                    // A line starting with a symbol is a standalone
                    // expression statement.
                    self.step(
                        State::Expr {
                            sink: ExprSink::Standalone,
                        },
                        tok,
                    )
                }
                _ => {
                    self.emit(ParseError::Unimplemented { range: tok.range });
                    State::Statements
                }
            },

            State::Expr { sink } => match tok.kind {
                TokenKind::NumberLiteral => {
                    self.push_literal(LiteralKind::Number, tok);
                    State::ExprContinue { sink }
                }
                TokenKind::StringLiteral => {
                    self.push_literal(LiteralKind::String, tok);
                    State::ExprContinue { sink }
                }
                TokenKind::BoolLiteral => {
                    self.push_literal(LiteralKind::Boolean, tok);
                    State::ExprContinue { sink }
                }
                TokenKind::Symbol => State::NameOrCall {
                    name: FullName::single(tok.text.clone(), tok.range),
                    sink,
                },
                TokenKind::RParen => {
                    // `f()`: the innermost open call closes with no
                    // arguments.
                    self.step(State::ExprContinue { sink }, tok)
                }
                _ => {
                    self.emit(ParseError::Unimplemented { range: tok.range });
                    State::Finding
                }
            },

            State::NameOrCall { name, sink } => match tok.kind {
                TokenKind::LParen => {
                    // The dotted name turns out to be a call; it stays
                    // open on the operand stack while its arguments are
                    // collected.
                    self.operands.push(Expr::Call(FunctionCall {
                        range: name.range,
                        name,
                        args: Vec::new(),
                        closed: false,
                    }));
                    State::Expr { sink }
                }
                TokenKind::Dot => {
                    let mut name = name;
                    name.range = name.range.union(tok.range);
                    State::GrowName { name, sink }
                }
                _ => {
                    self.operands.push(Expr::Name(NameLookup {
                        name,
                        looking_for: LookupKind::Unspecified,
                    }));
                    self.step(State::ExprContinue { sink }, tok)
                }
            },

            State::GrowName { name, sink } => {
                if tok.kind != TokenKind::Symbol {
                    self.emit(ParseError::UnfinishedFullName { range: tok.range });
                    return self.step(State::NameOrCall { name, sink }, tok);
                }
                let mut name = name;
                name.push_segment(tok.text.clone(), tok.range);
                State::NameOrCall { name, sink }
            }

            State::ExprContinue { sink } => match tok.kind {
                TokenKind::Comment | TokenKind::Newline | TokenKind::RBrace => {
                    if self.operands.len() != 1 {
                        self.emit(ParseError::TooManyExpressions { range: tok.range });
                    }
                    if let Some(expr) = self.operands.pop() {
                        self.operands.clear();
                        let statement = match sink {
                            ExprSink::ReturnValue => Statement::Return(expr),
                            ExprSink::Standalone => Statement::Standalone(expr),
                        };
                        self.working_function.statements.push(statement);
                    }
                    self.step(State::Statements, tok)
                }
                TokenKind::RParen => {
                    self.finish_func_call(tok.range);
                    State::ExprContinue { sink }
                }
                TokenKind::Comma => State::Expr { sink },
                _ => State::ExprContinue { sink },
            },
        }
    }

    fn push_literal(&mut self, kind: LiteralKind, tok: &Token) {
        self.operands.push(Expr::Literal(LiteralExpr {
            kind,
            text: tok.text.clone(),
            range: tok.range,
        }));
    }

    /// Close the innermost open function call: pop finished operands
    /// off the stack until the open call is found, hand them to it as
    /// arguments (popping yields reverse source order, so they are
    /// reversed), widen its range over everything absorbed, and push
    /// it back closed. An empty stack means the closing paren had no
    /// open call.
    fn finish_func_call(&mut self, close: Range) {
        let mut args: Vec<Expr> = Vec::new();
        let mut covered = close;
        loop {
            let Some(top) = self.operands.pop() else {
                self.emit(ParseError::ExtraneousClosingParen { range: close });
                return;
            };
            match top {
                Expr::Call(mut call) if !call.closed => {
                    args.reverse();
                    call.range = call.range.union(covered);
                    call.args = args;
                    call.closed = true;
                    self.operands.push(Expr::Call(call));
                    return;
                }
                other => {
                    covered = covered.union(other.range());
                    args.push(other);
                }
            }
        }
    }
}

fn strip_quotes(text: &str) -> String {
    text.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::types::FunctionType;

    fn parse_src(src: &str) -> ProgramTree {
        parse(&lex(src))
    }

    #[test]
    fn parses_module_function_and_return() {
        let tree = parse_src("module main\nfn f(a: u8) -> u8 { return a }\n");
        assert!(tree.valid, "unexpected errors: {:?}", tree.errors);
        assert_eq!(tree.module_name, "main");
        assert_eq!(tree.functions.len(), 1);

        let f = tree.functions.get("f").expect("function f");
        assert_eq!(
            f.signature,
            FunctionType {
                params: vec![NamedType {
                    name: "a".into(),
                    ty: Some(Type::Builtin(BuiltinKind::U8)),
                }],
                return_type: Some(Box::new(Type::Builtin(BuiltinKind::U8))),
            }
        );

        assert_eq!(f.statements.len(), 1);
        match &f.statements[0] {
            Statement::Return(Expr::Name(lookup)) => {
                assert_eq!(lookup.name.joined(), "a");
            }
            other => panic!("expected return of a name lookup, got {other:?}"),
        }
    }

    #[test]
    fn nested_call_arguments_keep_source_order() {
        let tree = parse_src("module m\nfn g() {\nf(1, h(2, 3))\n}\n");
        let g = tree.functions.get("g").expect("function g");
        let Statement::Standalone(Expr::Call(call)) = &g.statements[0] else {
            panic!("expected a standalone call, got {:?}", g.statements[0]);
        };
        assert_eq!(call.name.joined(), "f");
        assert!(call.closed);
        assert_eq!(call.args.len(), 2);
        assert!(
            matches!(&call.args[0], Expr::Literal(lit) if lit.text == "1"),
            "first argument should be the literal 1"
        );
        let Expr::Call(inner) = &call.args[1] else {
            panic!("second argument should be the inner call");
        };
        assert_eq!(inner.name.joined(), "h");
        assert!(inner.closed);
        let texts: Vec<&str> = inner
            .args
            .iter()
            .map(|a| match a {
                Expr::Literal(lit) => lit.text.as_str(),
                other => panic!("unexpected argument {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["2", "3"]);
    }

    #[test]
    fn calls_may_take_no_arguments() {
        let tree = parse_src("module m\nfn g() {\nf()\n}\n");
        assert!(tree.valid, "unexpected errors: {:?}", tree.errors);
        let g = tree.functions.get("g").expect("function g");
        let Statement::Standalone(Expr::Call(call)) = &g.statements[0] else {
            panic!("expected a standalone call, got {:?}", g.statements[0]);
        };
        assert_eq!(call.name.joined(), "f");
        assert!(call.closed);
        assert!(call.args.is_empty());
    }

    #[test]
    fn function_definitions_record_their_name_range() {
        let src = "module m\nfn locate() {\n}\n";
        let tree = parse_src(src);
        let lo = src.find("locate").expect("name present");
        let f = tree.functions.get("locate").expect("function locate");
        assert_eq!(f.name_range, Range::new(lo, lo + "locate".len()));
    }

    #[test]
    fn call_range_covers_name_arguments_and_close_paren() {
        let src = "module m\nfn g() {\nf(1, 23)\n}\n";
        let tree = parse_src(src);
        let g = tree.functions.get("g").expect("function g");
        let Statement::Standalone(expr) = &g.statements[0] else {
            panic!("expected standalone statement");
        };
        let lo = src.find("f(1").expect("call present");
        let hi = lo + "f(1, 23)".len();
        assert_eq!(expr.range(), Range::new(lo, hi));
    }

    #[test]
    fn dotted_names_grow_segment_by_segment() {
        let tree = parse_src("module m\nfn g() {\nstd.println(\"x\")\n}\n");
        assert!(tree.valid, "unexpected errors: {:?}", tree.errors);
        let g = tree.functions.get("g").expect("function g");
        let Statement::Standalone(Expr::Call(call)) = &g.statements[0] else {
            panic!("expected a standalone call");
        };
        assert_eq!(call.name.joined(), "std.println");
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn second_module_declaration_is_recoverable_and_keeps_the_first() {
        let tree = parse_src("module a\nmodule b\n");
        assert_eq!(tree.module_name, "a");
        assert!(!tree.valid);
        assert!(!tree.fatal);
        assert_eq!(tree.errors.len(), 1);
        assert!(matches!(
            tree.errors[0],
            ParseError::MultipleModuleDefinitions { .. }
        ));
    }

    #[test]
    fn imports_are_stored_without_quotes() {
        let tree = parse_src("module m\nimport \"std\"\nimport \"math\"\n");
        assert!(tree.valid);
        assert_eq!(tree.imports, vec!["std", "math"]);
    }

    #[test]
    fn import_of_a_bare_word_recovers_at_end_of_line() {
        let tree = parse_src("import std\nimport \"math\"\n");
        assert!(!tree.valid);
        assert!(!tree.fatal);
        assert!(matches!(
            tree.errors[0],
            ParseError::ImportMustBeString { .. }
        ));
        // Parsing resumed on the next line.
        assert_eq!(tree.imports, vec!["math"]);
    }

    #[test]
    fn trailing_tokens_after_module_name_are_recoverable() {
        let tree = parse_src("module main extra\nimport \"std\"\n");
        assert!(!tree.valid);
        assert!(!tree.fatal);
        assert!(matches!(
            tree.errors[0],
            ParseError::ExpectedEndOfLine { .. }
        ));
        assert_eq!(tree.module_name, "main");
        assert_eq!(tree.imports, vec!["std"]);
    }

    #[test]
    fn function_without_name_is_fatal() {
        let tree = parse_src("fn (a: u8) {\n}\n");
        assert!(tree.fatal);
        assert!(matches!(tree.errors[0], ParseError::FunctionNeedsName { .. }));
        assert!(tree.functions.is_empty());
    }

    #[test]
    fn garbage_in_parameter_list_is_fatal() {
        let tree = parse_src("fn f(a b) {\n}\n");
        assert!(tree.fatal);
        assert!(matches!(
            tree.errors[0],
            ParseError::UnexpectedInParameterList { .. }
        ));
    }

    #[test]
    fn extraneous_closing_paren_is_fatal() {
        let tree = parse_src("module m\nfn f() {\nreturn 1)\n}\n");
        assert!(tree.fatal);
        assert!(tree
            .errors
            .iter()
            .any(|e| matches!(e, ParseError::ExtraneousClosingParen { .. })));
    }

    #[test]
    fn unimplemented_statement_form_is_fatal() {
        let tree = parse_src("module m\nfn f() {\n= 1\n}\n");
        assert!(tree.fatal);
        assert!(tree
            .errors
            .iter()
            .any(|e| matches!(e, ParseError::Unimplemented { .. })));
    }

    #[test]
    fn two_expressions_on_one_line_recover_with_one_diagnostic() {
        let tree = parse_src("module m\nfn f() {\nreturn 1, 2\n}\n");
        assert!(!tree.fatal);
        let count = tree
            .errors
            .iter()
            .filter(|e| matches!(e, ParseError::TooManyExpressions { .. }))
            .count();
        assert_eq!(count, 1);
        // The function still finished parsing.
        assert!(tree.functions.contains_key("f"));
    }

    #[test]
    fn parameters_may_omit_their_type() {
        let tree = parse_src("module m\nfn f(a) {\n}\n");
        assert!(tree.valid, "unexpected errors: {:?}", tree.errors);
        let f = tree.functions.get("f").expect("function f");
        assert_eq!(f.signature.params.len(), 1);
        assert_eq!(f.signature.params[0].name, "a");
        assert_eq!(f.signature.params[0].ty, None);
        assert_eq!(f.signature.return_type, None);
    }

    #[test]
    fn unknown_type_names_stay_unresolved() {
        let tree = parse_src("module m\nfn f(a: Widget) {\n}\n");
        let f = tree.functions.get("f").expect("function f");
        assert_eq!(
            f.signature.params[0].ty,
            Some(Type::Name("Widget".into()))
        );
    }

    #[test]
    fn lex_errors_abort_the_parse_with_an_invalid_tree() {
        let tree = parse_src("module main ?\n");
        assert!(!tree.valid);
        assert!(tree.errors.is_empty());
        assert!(tree.module_name.is_empty());
        assert!(tree.functions.is_empty());
    }
}
