//! Semantic validation: scope-based name resolution and
//! type-compatibility checking over a finished [`ProgramTree`].
//!
//! The validator never mutates the tree; it walks it with its own
//! scope stack and collects diagnostics. Every function is validated
//! independently, so one function's errors never hide another's.

use std::collections::HashMap;

use thiserror::Error;

use crate::ast::{Expr, FunctionCall, LiteralKind, LookupKind, NameLookup, Statement};
use crate::builtins::builtin_functions;
use crate::diagnostic::SourceDiagnostic;
use crate::program::{FunctionDefinition, ProgramTree};
use crate::span::Range;
use crate::types::{BuiltinKind, FunctionType, Type, implicit_conversion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("could not find {looking_for} `{name}`")]
    NameLookupFailed {
        name: String,
        looking_for: LookupKind,
        range: Range,
    },

    #[error("duplicate definition of `{name}`")]
    DuplicateName { name: String, range: Option<Range> },

    #[error("wrong number of arguments to `{name}{signature}`: expected {expected}, got {got}")]
    WrongArgumentCount {
        name: String,
        signature: FunctionType,
        expected: usize,
        got: usize,
        range: Range,
    },

    #[error("wrong type for function argument: wanted `{wanted}`, got `{actual}`")]
    WrongArgumentType {
        wanted: Type,
        actual: Type,
        range: Range,
    },

    #[error("return value has type `{actual}` but the function returns `{wanted}`")]
    ReturnTypeMismatch {
        wanted: Type,
        actual: Type,
        range: Range,
    },
}

impl SourceDiagnostic for ValidationError {
    fn range(&self) -> Option<Range> {
        match self {
            ValidationError::NameLookupFailed { range, .. }
            | ValidationError::WrongArgumentCount { range, .. }
            | ValidationError::WrongArgumentType { range, .. }
            | ValidationError::ReturnTypeMismatch { range, .. } => Some(*range),
            ValidationError::DuplicateName { range, .. } => *range,
        }
    }
}

/// One lexical scope: qualified name to type, plus a base-name index
/// used to reject duplicate definitions within the same scope.
#[derive(Debug, Default)]
pub struct Scope {
    vals: HashMap<String, Type>,
    /// Base name (key up to any `(`) to qualified key.
    names: HashMap<String, String>,
}

impl Scope {
    /// Bind `key` to `ty`. A key whose base name is already bound in
    /// this scope is a duplicate: the error is returned and the new
    /// binding rejected.
    fn add(&mut self, key: &str, range: Option<Range>, ty: Type) -> Result<(), ValidationError> {
        let base = base_name(key).to_string();
        if self.names.contains_key(&base) {
            return Err(ValidationError::DuplicateName { name: base, range });
        }
        self.vals.insert(key.to_string(), ty);
        self.names.insert(base, key.to_string());
        Ok(())
    }

    /// Resolve a complete joined name: the exact qualified key first,
    /// then through the base-name index. Never a partial match on a
    /// dotted path.
    fn lookup(&self, joined: &str) -> Option<&Type> {
        self.vals.get(joined).or_else(|| {
            self.names
                .get(joined)
                .and_then(|qualified| self.vals.get(qualified))
        })
    }
}

fn base_name(key: &str) -> &str {
    match key.find('(') {
        Some(i) => &key[..i],
        None => key,
    }
}

/// Result of validating one program tree.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    pub valid: bool,
}

/// Scope stack (innermost last) plus collected diagnostics.
struct ValidationContext {
    scopes: Vec<Scope>,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

/// Validate a syntactically complete program tree.
pub fn validate(tree: &ProgramTree) -> ValidationOutcome {
    let mut ctx = ValidationContext {
        scopes: Vec::new(),
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let mut global = Scope::default();

    // Builtins are bound first so that a colliding user definition is
    // the one reported.
    for builtin in builtin_functions() {
        if let Err(err) = global.add(&builtin.key, None, Type::Function(builtin.signature)) {
            ctx.errors.push(err);
        }
    }
    for (name, function) in &tree.functions {
        let ty = Type::Function(function.signature.clone());
        if let Err(err) = global.add(name, Some(function.name_range), ty) {
            ctx.errors.push(err);
        }
    }
    for (name, initializer) in &tree.globals {
        let ty = ctx.type_of(initializer);
        if let Err(err) = global.add(name, None, ty) {
            ctx.errors.push(err);
        }
    }
    for (name, record) in &tree.type_defs {
        let alias = Type::Definition(Box::new(Type::Record(record.clone())));
        if let Err(err) = global.add(name, None, alias) {
            ctx.errors.push(err);
        }
    }

    ctx.scopes.push(global);

    for function in tree.functions.values() {
        ctx.validate_function(function);
    }

    let valid = ctx.errors.is_empty();
    ValidationOutcome {
        errors: ctx.errors,
        warnings: ctx.warnings,
        valid,
    }
}

impl ValidationContext {
    /// Innermost-first resolution over the scope stack.
    fn lookup(&self, joined: &str) -> Option<&Type> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(joined))
    }

    /// Validate one function body inside a fresh scope holding its
    /// parameters. The scope is popped unconditionally afterward;
    /// push/pop counts balance no matter how many errors occurred.
    fn validate_function(&mut self, function: &FunctionDefinition) {
        let mut scope = Scope::default();
        for param in &function.signature.params {
            let ty = param
                .ty
                .clone()
                .unwrap_or(Type::Builtin(BuiltinKind::Unknown));
            if let Err(err) = scope.add(&param.name, None, ty) {
                self.errors.push(err);
            }
        }

        let depth = self.scopes.len();
        self.scopes.push(scope);
        for statement in &function.statements {
            self.validate_statement(statement, &function.signature);
        }
        self.scopes.pop();
        debug_assert_eq!(depth, self.scopes.len());
    }

    fn validate_statement(&mut self, statement: &Statement, signature: &FunctionType) {
        match statement {
            Statement::Return(value) => {
                self.validate_expr(value);
                if let Some(declared) = &signature.return_type {
                    let actual = self.type_of(value);
                    // An unknown actual type means the expression
                    // already failed to validate; don't pile on.
                    if actual != Type::Builtin(BuiltinKind::Unknown)
                        && implicit_conversion(&actual, declared).is_none()
                    {
                        self.errors.push(ValidationError::ReturnTypeMismatch {
                            wanted: (**declared).clone(),
                            actual,
                            range: value.range(),
                        });
                    }
                }
            }
            Statement::Standalone(expr) => self.validate_expr(expr),
            Statement::Assignment { value, .. } => self.validate_expr(value),
        }
    }

    fn validate_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}
            Expr::Name(lookup) => self.validate_name(lookup),
            Expr::Call(call) => self.validate_call(call),
            Expr::Infix(infix) => {
                self.validate_expr(&infix.lhs);
                self.validate_expr(&infix.rhs);
            }
        }
    }

    fn validate_name(&mut self, lookup: &NameLookup) {
        let joined = lookup.name.joined();
        if self.lookup(&joined).is_none() {
            self.errors.push(ValidationError::NameLookupFailed {
                name: joined,
                looking_for: lookup.looking_for,
                range: lookup.name.range,
            });
        }
    }

    fn validate_call(&mut self, call: &FunctionCall) {
        let joined = call.name.joined();
        let Some(resolved) = self.lookup(&joined).cloned() else {
            self.errors.push(ValidationError::NameLookupFailed {
                name: joined,
                looking_for: LookupKind::Function,
                range: call.name.range,
            });
            // Nothing to check the arguments against.
            return;
        };
        let Type::Function(signature) = resolved else {
            self.errors.push(ValidationError::NameLookupFailed {
                name: joined,
                looking_for: LookupKind::Function,
                range: call.name.range,
            });
            return;
        };

        if call.args.len() != signature.params.len() {
            self.errors.push(ValidationError::WrongArgumentCount {
                name: joined,
                expected: signature.params.len(),
                got: call.args.len(),
                signature,
                range: call.range,
            });
            return;
        }

        for (arg, param) in call.args.iter().zip(&signature.params) {
            self.validate_expr(arg);
            let actual = self.type_of(arg);
            let Some(wanted) = &param.ty else {
                continue;
            };
            match implicit_conversion(&actual, wanted) {
                // The conversion marker is meant to drive later code
                // generation; nothing applies it here.
                Some(_conversion) => {}
                None => {
                    if actual != Type::Builtin(BuiltinKind::Unknown) {
                        self.errors.push(ValidationError::WrongArgumentType {
                            wanted: wanted.clone(),
                            actual,
                            range: arg.range(),
                        });
                    }
                }
            }
        }
    }

    /// Static type of an expression. Emits no diagnostics; resolution
    /// failures surface through `validate_expr` instead.
    fn type_of(&self, expr: &Expr) -> Type {
        match expr {
            Expr::Literal(lit) => Type::Builtin(match lit.kind {
                LiteralKind::Number => BuiltinKind::UnconstrainedInt,
                LiteralKind::String => BuiltinKind::String,
                LiteralKind::Boolean => BuiltinKind::Boolean,
            }),
            Expr::Name(lookup) => self
                .lookup(&lookup.name.joined())
                .cloned()
                .unwrap_or(Type::Builtin(BuiltinKind::Unknown)),
            Expr::Call(call) => match self.lookup(&call.name.joined()) {
                Some(Type::Function(signature)) => signature
                    .return_type
                    .as_deref()
                    .cloned()
                    .unwrap_or(Type::Builtin(BuiltinKind::Void)),
                _ => Type::Builtin(BuiltinKind::Unknown),
            },
            Expr::Infix(infix) => self.type_of(&infix.lhs),
        }
    }
}
