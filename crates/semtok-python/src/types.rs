//! Type facts as reported by the type engine.
//!
//! The engine's type model is a closed union: [`TypeKind`] lists every
//! category classification cares about, and [`TypeFlags`] says whether a
//! type denotes a value (`INSTANCE`) or the type itself (`INSTANTIABLE`).
//! `x: int` gives `x` an instance of `int`; the name `int` in that annotation
//! is the instantiable class.
//!
//! `Never` is special: the engine flags it as both instance and instantiable,
//! see [`Type::never`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Instance vs. instantiable form of a type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct TypeFlags: u8 {
        /// The type itself is being referenced (a class, an alias, a TypeVar).
        const INSTANTIABLE = 1 << 0;
        /// A value of the type.
        const INSTANCE = 1 << 1;
    }
}

/// A type with its instance/instantiable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    #[serde(flatten)]
    pub kind: TypeKind,
    pub flags: TypeFlags,
}

/// The type categories the classifier distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum TypeKind {
    /// A name referenced before it is bound.
    Unbound,
    /// Inference gave up.
    Unknown,
    /// The empty type.
    Never,
    Function(FunctionType),
    OverloadedFunction(OverloadedType),
    Module(ModuleType),
    Class(ClassType),
    TypeVar(TypeVarType),
    Union(UnionType),
}

impl TypeKind {
    /// Category name for diagnostics.
    pub fn category_name(&self) -> &'static str {
        match self {
            TypeKind::Unbound => "unbound",
            TypeKind::Unknown => "unknown",
            TypeKind::Never => "never",
            TypeKind::Function(_) => "function",
            TypeKind::OverloadedFunction(_) => "overloaded_function",
            TypeKind::Module(_) => "module",
            TypeKind::Class(_) => "class",
            TypeKind::TypeVar(_) => "type_var",
            TypeKind::Union(_) => "union",
        }
    }
}

/// Facts about a function's declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Declared directly in a class body.
    #[serde(default)]
    pub is_method: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub name: String,
    /// Absent for synthesized callables (e.g. `Callable[[int], str]`).
    pub declaration: Option<FunctionDeclaration>,
}

impl FunctionType {
    /// Whether the declaration, if any, marks this function as a method.
    pub fn is_method(&self) -> bool {
        self.declaration.is_some_and(|d| d.is_method)
    }
}

/// An overloaded function; `overloads` are in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadedType {
    pub overloads: Vec<FunctionType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVarType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    pub members: Vec<Type>,
}

impl Type {
    pub fn new(kind: TypeKind, flags: TypeFlags) -> Self {
        Type { kind, flags }
    }

    pub fn unknown() -> Self {
        Type::new(TypeKind::Unknown, TypeFlags::INSTANTIABLE | TypeFlags::INSTANCE)
    }

    pub fn unbound() -> Self {
        Type::new(TypeKind::Unbound, TypeFlags::INSTANTIABLE | TypeFlags::INSTANCE)
    }

    /// `Never` is reported as both instantiable and an instance, so the flags
    /// alone cannot tell `x: Never` apart from a `Never` alias.
    pub fn never() -> Self {
        Type::new(TypeKind::Never, TypeFlags::INSTANTIABLE | TypeFlags::INSTANCE)
    }

    /// A value of class `name`.
    pub fn instance_of(name: impl Into<String>) -> Self {
        Type::new(
            TypeKind::Class(ClassType { name: name.into() }),
            TypeFlags::INSTANCE,
        )
    }

    /// The class `name` itself.
    pub fn class(name: impl Into<String>) -> Self {
        Type::new(
            TypeKind::Class(ClassType { name: name.into() }),
            TypeFlags::INSTANTIABLE,
        )
    }

    /// A callable value declared by `def`.
    pub fn function(name: impl Into<String>, is_method: bool) -> Self {
        Type::new(
            TypeKind::Function(FunctionType {
                name: name.into(),
                declaration: Some(FunctionDeclaration { is_method }),
            }),
            TypeFlags::INSTANCE,
        )
    }

    /// An overloaded callable value.
    pub fn overloaded(overloads: Vec<FunctionType>) -> Self {
        Type::new(
            TypeKind::OverloadedFunction(OverloadedType { overloads }),
            TypeFlags::INSTANCE,
        )
    }

    pub fn module(name: impl Into<String>) -> Self {
        Type::new(
            TypeKind::Module(ModuleType { name: name.into() }),
            TypeFlags::INSTANCE,
        )
    }

    /// A type variable referenced as a type.
    pub fn type_var(name: impl Into<String>) -> Self {
        Type::new(
            TypeKind::TypeVar(TypeVarType { name: name.into() }),
            TypeFlags::INSTANTIABLE,
        )
    }

    /// A union value; use [`Type::into_instantiable`] for the union as a type.
    pub fn union(members: Vec<Type>) -> Self {
        Type::new(TypeKind::Union(UnionType { members }), TypeFlags::INSTANCE)
    }

    pub fn is_instance(&self) -> bool {
        self.flags.contains(TypeFlags::INSTANCE)
    }

    pub fn is_instantiable(&self) -> bool {
        self.flags.contains(TypeFlags::INSTANTIABLE)
    }

    /// The same type in instance form.
    pub fn into_instance(self) -> Self {
        Type::new(self.kind, TypeFlags::INSTANCE)
    }

    /// The same type in instantiable form.
    pub fn into_instantiable(self) -> Self {
        Type::new(self.kind, TypeFlags::INSTANTIABLE)
    }
}
