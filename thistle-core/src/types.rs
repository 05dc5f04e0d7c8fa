//! The Thistle type system: builtin primitives, user types, function
//! signatures, and the implicit-conversion table.
//!
//! This module is self-contained: it does not depend on parsing or
//! validation, only on the AST (a constrained type carries a predicate
//! expression).

use core::fmt;

use crate::ast::Expr;

/// Builtin primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Unknown,
    Boolean,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    /// Provisional type of a bare numeric literal before the checker
    /// settles on a concrete integer type.
    UnconstrainedInt,
    String,
    Void,
}

impl BuiltinKind {
    /// The parser's fixed table of builtin type names.
    pub fn from_name(name: &str) -> Option<BuiltinKind> {
        Some(match name {
            "u8" => BuiltinKind::U8,
            "u16" => BuiltinKind::U16,
            "u32" => BuiltinKind::U32,
            "u64" => BuiltinKind::U64,
            "i8" => BuiltinKind::I8,
            "i16" => BuiltinKind::I16,
            "i32" => BuiltinKind::I32,
            "i64" => BuiltinKind::I64,
            "bool" => BuiltinKind::Boolean,
            "string" => BuiltinKind::String,
            "void" => BuiltinKind::Void,
            _ => return None,
        })
    }

    /// Concrete sized integer types, the targets an unconstrained
    /// integer literal may implicitly become.
    pub fn is_sized_integer(self) -> bool {
        matches!(
            self,
            BuiltinKind::U8
                | BuiltinKind::U16
                | BuiltinKind::U32
                | BuiltinKind::U64
                | BuiltinKind::I8
                | BuiltinKind::I16
                | BuiltinKind::I32
                | BuiltinKind::I64
        )
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuiltinKind::Unknown => "unknown",
            BuiltinKind::Boolean => "bool",
            BuiltinKind::U8 => "u8",
            BuiltinKind::U16 => "u16",
            BuiltinKind::U32 => "u32",
            BuiltinKind::U64 => "u64",
            BuiltinKind::I8 => "i8",
            BuiltinKind::I16 => "i16",
            BuiltinKind::I32 => "i32",
            BuiltinKind::I64 => "i64",
            BuiltinKind::UnconstrainedInt => "integer literal",
            BuiltinKind::String => "string",
            BuiltinKind::Void => "void",
        })
    }
}

/// A name/type pair: function parameters and record fields.
///
/// The type is optional because parameters may be written without an
/// annotation (`fn f(a)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub ty: Option<Type>,
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{}: {}", self.name, ty),
            None => f.write_str(&self.name),
        }
    }
}

/// A function signature: ordered named parameters plus an optional
/// return type (`None` renders as "no return").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionType {
    pub params: Vec<NamedType>,
    pub return_type: Option<Box<Type>>,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(") -> ")?;
        match &self.return_type {
            Some(ty) => write!(f, "{ty}"),
            None => f.write_str("no return"),
        }
    }
}

/// An ordered list of named fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordType {
    pub fields: Vec<NamedType>,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("record {")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, " {field}")?;
        }
        f.write_str(" }")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Builtin(BuiltinKind),
    /// An identifier reference not yet resolved to a definition.
    Name(String),
    Function(FunctionType),
    Record(RecordType),
    Pointer(Box<Type>),
    /// A base type restricted by a boolean predicate over its values.
    Constrained { base: Box<Type>, constraint: Expr },
    /// A named alias wrapping another type.
    Definition(Box<Type>),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Builtin(kind) => write!(f, "{kind}"),
            Type::Name(name) => f.write_str(name),
            Type::Function(ft) => write!(f, "{ft}"),
            Type::Record(rt) => write!(f, "{rt}"),
            Type::Pointer(to) => write!(f, "*{to}"),
            Type::Constrained { base, .. } => write!(f, "{base} | constrained"),
            Type::Definition(of) => write!(f, "alias of {of}"),
        }
    }
}

/// The operation an implicit conversion performs. The integer-literal
/// marker is intended to drive later code generation; nothing in the
/// front end evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Identity,
    IntLiteralToInt(BuiltinKind),
}

/// The exhaustive implicit-conversion table.
///
/// A type converts to itself with no operation. An unconstrained
/// integer literal converts to any concrete sized integer type. A
/// constrained target checks against its base type. No other pair of
/// distinct types is implicitly convertible; in particular there is
/// no rule yet between user/record types.
pub fn implicit_conversion(from: &Type, to: &Type) -> Option<Conversion> {
    if let Type::Constrained { base, .. } = to {
        return implicit_conversion(from, base);
    }
    if from == to {
        return Some(Conversion::Identity);
    }
    match (from, to) {
        (Type::Builtin(BuiltinKind::UnconstrainedInt), Type::Builtin(target))
            if target.is_sized_integer() =>
        {
            Some(Conversion::IntLiteralToInt(*target))
        }
        _ => None,
    }
}
