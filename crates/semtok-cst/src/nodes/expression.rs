// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use super::{Name, Span};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    Name(Name),
    Attribute(Box<Attribute>),
    Call(Box<Call>),
    Subscript(Box<Subscript>),
    BinaryOperation(Box<BinaryOperation>),
    Tuple(Tuple),
    List(List),
    Constant(Constant),
}

impl Expression {
    pub fn attribute(value: Expression, attr: Name) -> Self {
        Expression::Attribute(Box::new(Attribute { value, attr }))
    }

    pub fn call(func: Expression, args: Vec<Arg>) -> Self {
        Expression::Call(Box::new(Call { func, args }))
    }

    pub fn subscript(value: Expression, slice: Vec<Expression>) -> Self {
        Expression::Subscript(Box::new(Subscript { value, slice }))
    }

    pub fn binary(left: Expression, right: Expression) -> Self {
        Expression::BinaryOperation(Box::new(BinaryOperation { left, right }))
    }
}

impl From<Name> for Expression {
    fn from(name: Name) -> Self {
        Expression::Name(name)
    }
}

/// `value.attr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub value: Expression,
    pub attr: Name,
}

/// `func(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub func: Expression,
    #[serde(default)]
    pub args: Vec<Arg>,
}

/// A call or class-header argument, optionally `keyword=value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub keyword: Option<Name>,
    pub value: Expression,
}

impl Arg {
    pub fn positional(value: Expression) -> Self {
        Arg {
            keyword: None,
            value,
        }
    }

    pub fn keyword(keyword: Name, value: Expression) -> Self {
        Arg {
            keyword: Some(keyword),
            value,
        }
    }
}

/// `value[slice, ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscript {
    pub value: Expression,
    pub slice: Vec<Expression>,
}

/// `left <op> right`. The operator is irrelevant to classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    #[serde(default)]
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub elements: Vec<Expression>,
}

/// A literal (number, string, `None`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub span: Span,
}
