//! Built-in functions visible at the Thistle language level.
//!
//! The validator binds these into the global scope before user
//! definitions. Scope keys are signature-qualified (`u8(u16)`); the
//! scope's base-name index maps the plain name to the qualified entry.

use crate::ast::{Expr, LiteralExpr, LiteralKind};
use crate::span::Range;
use crate::types::{BuiltinKind, FunctionType, NamedType, Type};

/// One builtin bound into the global scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinFunction {
    /// Signature-qualified scope key, e.g. `std.println(string)`.
    pub key: String,
    pub signature: FunctionType,
}

/// The complete builtin surface: `std.println` plus the numeric-cast
/// family named after the target type.
pub fn builtin_functions() -> Vec<BuiltinFunction> {
    vec![
        BuiltinFunction {
            key: "std.println(string)".into(),
            signature: FunctionType {
                params: vec![NamedType {
                    name: "str".into(),
                    ty: Some(Type::Builtin(BuiltinKind::String)),
                }],
                return_type: Some(Box::new(Type::Builtin(BuiltinKind::Void))),
            },
        },
        BuiltinFunction {
            key: "u8(u16)".into(),
            signature: cast(BuiltinKind::U8, constrained(BuiltinKind::U16)),
        },
        BuiltinFunction {
            key: "u16(u32)".into(),
            signature: cast(BuiltinKind::U16, Type::Builtin(BuiltinKind::U32)),
        },
        BuiltinFunction {
            key: "u32(u64)".into(),
            signature: cast(BuiltinKind::U32, Type::Builtin(BuiltinKind::U64)),
        },
    ]
}

fn cast(target: BuiltinKind, from: Type) -> FunctionType {
    FunctionType {
        params: vec![NamedType {
            name: "v".into(),
            ty: Some(from),
        }],
        return_type: Some(Box::new(Type::Builtin(target))),
    }
}

/// The `u8` cast takes a constrained source: a base type restricted by
/// a predicate (the predicate is the trivial `true` for now).
fn constrained(base: BuiltinKind) -> Type {
    Type::Constrained {
        base: Box::new(Type::Builtin(base)),
        constraint: Expr::Literal(LiteralExpr {
            kind: LiteralKind::Boolean,
            text: "true".into(),
            range: Range::default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_signature_qualified() {
        let builtins = builtin_functions();
        assert!(builtins.iter().any(|b| b.key == "std.println(string)"));
        assert!(builtins.iter().any(|b| b.key == "u8(u16)"));
    }

    #[test]
    fn println_takes_a_string_and_returns_void() {
        let println = builtin_functions()
            .into_iter()
            .find(|b| b.key.starts_with("std.println"))
            .expect("println builtin");
        assert_eq!(println.signature.to_string(), "(str: string) -> void");
    }
}
