// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use super::{Arg, DottedName, Expression, Name};

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Import(Import),
    ImportFrom(ImportFrom),
    TypeAlias(TypeAlias),
    Assign(Assign),
    AugAssign(AugAssign),
    Expr(Expr),
    Return(Return),
    If(If),
    For(For),
    While(While),
    Pass,
}

// ============================================================================
// Declarations
// ============================================================================

/// `def name[...](params) -> returns: body`
///
/// `is_method` is the binder's verdict on the declaration (defined directly in
/// a class body), not something derivable from the node's position alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub is_method: bool,
    pub name: Name,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    #[serde(default)]
    pub params: Vec<Param>,
    pub returns: Option<Expression>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl FunctionDef {
    /// A synchronous, undecorated, parameterless function with an empty body.
    pub fn new(name: Name) -> Self {
        FunctionDef {
            decorators: Vec::new(),
            is_async: false,
            is_method: false,
            name,
            type_params: Vec::new(),
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }
}

/// `class name[...](bases): body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    #[serde(default)]
    pub decorators: Vec<Decorator>,
    pub name: Name,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    #[serde(default)]
    pub bases: Vec<Arg>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl ClassDef {
    pub fn new(name: Name) -> Self {
        ClassDef {
            decorators: Vec::new(),
            name,
            type_params: Vec::new(),
            bases: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    pub expression: Expression,
}

/// Star prefix of a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStar {
    #[default]
    None,
    /// `*args`
    Args,
    /// `**kwargs`
    Kwargs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub star: ParamStar,
    pub name: Name,
    pub annotation: Option<Expression>,
    pub default: Option<Expression>,
}

impl Param {
    pub fn new(name: Name) -> Self {
        Param {
            star: ParamStar::None,
            name,
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Expression) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

/// Flavor of a PEP 695 type parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParamKind {
    /// `T`
    #[default]
    TypeVar,
    /// `**P`
    ParamSpec,
    /// `*Ts`
    TypeVarTuple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParam {
    #[serde(default)]
    pub kind: TypeParamKind,
    pub name: Name,
    pub bound: Option<Expression>,
    pub default: Option<Expression>,
}

impl TypeParam {
    pub fn new(name: Name) -> Self {
        TypeParam {
            kind: TypeParamKind::TypeVar,
            name,
            bound: None,
            default: None,
        }
    }
}

/// `type Name[...] = value`
///
/// `start` is the offset of the `type` soft keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub start: u32,
    pub name: Name,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    pub value: Expression,
}

// ============================================================================
// Imports
// ============================================================================

/// `import a.b as c, d`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub names: Vec<ImportAlias>,
}

/// One `module [as alias]` clause of an `import` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAlias {
    pub module: DottedName,
    pub asname: Option<Name>,
}

/// `from ..module import a as b, c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFrom {
    /// Number of leading dots.
    #[serde(default)]
    pub relative: u32,
    /// Absent for `from . import x`.
    pub module: Option<DottedName>,
    pub names: ImportNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportNames {
    Star,
    Aliases(Vec<ImportFromAlias>),
}

/// One `name [as alias]` clause of a `from` import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFromAlias {
    pub name: Name,
    pub asname: Option<Name>,
}

impl ImportFromAlias {
    /// The node whose binding the clause creates: the alias if present.
    pub fn bound_name(&self) -> &Name {
        self.asname.as_ref().unwrap_or(&self.name)
    }
}

// ============================================================================
// Simple and control-flow statements
// ============================================================================

/// `targets = value`, `target: annotation = value` or bare `target: annotation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub targets: Vec<Expression>,
    pub annotation: Option<Expression>,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugAssign {
    pub target: Expression,
    pub value: Expression,
}

/// An expression statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub test: Expression,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub orelse: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    #[serde(default)]
    pub is_async: bool,
    pub target: Expression,
    pub iter: Expression,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub orelse: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub test: Expression,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub orelse: Vec<Statement>,
}
