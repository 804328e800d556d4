// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for tree traversal.
//!
//! This module contains walk functions that traverse nodes and call visitor methods.
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Source order**: Children are visited left-to-right, top-to-bottom
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)
//!
//! # Names owned by their declaration
//!
//! The name of a `def`/`class`, the dotted module path of an import and the
//! alias of `import x as y` belong to the declaring node: they are reachable
//! through its `visit_*` hook but are not walked again as plain [`Name`]s.
//! Every other identifier, including the alias of `from m import x as y`, is
//! walked through [`walk_name`].

use super::traits::{VisitResult, Visitor};
use crate::nodes::{
    // Module
    Module,
    // Statements
    Statement, FunctionDef, ClassDef, Decorator, Param, TypeParam, TypeAlias, Import,
    ImportAlias, ImportFrom, ImportFromAlias, ImportNames, Assign, AugAssign, Expr, Return, If,
    For, While,
    // Expressions
    Expression, Name, Attribute, Call, Arg, Subscript, BinaryOperation, Tuple, List, Constant,
};

// ============================================================================
// Module walk
// ============================================================================

/// Walk a [`Module`] node and its children.
///
/// Traversal order:
/// 1. `visit_module`
/// 2. Walk each statement in `body` (in source order)
/// 3. `leave_module`
pub fn walk_module<V: Visitor>(visitor: &mut V, node: &Module) -> VisitResult {
    let result = visitor.visit_module(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_module(node);
    VisitResult::Continue
}

/// Walk a sequence of statements, stopping early on `Stop`.
pub fn walk_statements<V: Visitor>(visitor: &mut V, body: &[Statement]) -> VisitResult {
    for stmt in body {
        if walk_statement(visitor, stmt) == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    VisitResult::Continue
}

/// Walk a sequence of expressions, stopping early on `Stop`.
pub fn walk_expressions<V: Visitor>(visitor: &mut V, exprs: &[Expression]) -> VisitResult {
    for expr in exprs {
        if walk_expression(visitor, expr) == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    VisitResult::Continue
}

/// Walk an optional expression.
fn walk_optional_expression<V: Visitor>(
    visitor: &mut V,
    expr: Option<&Expression>,
) -> VisitResult {
    match expr {
        Some(e) => walk_expression(visitor, e),
        None => VisitResult::Continue,
    }
}

// ============================================================================
// Statement walks
// ============================================================================

/// Walk a [`Statement`] node.
///
/// Dispatches to the specific statement walk.
pub fn walk_statement<V: Visitor>(visitor: &mut V, node: &Statement) -> VisitResult {
    let result = visitor.visit_statement(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner_result = match node {
                Statement::FunctionDef(f) => walk_function_def(visitor, f),
                Statement::ClassDef(c) => walk_class_def(visitor, c),
                Statement::Import(i) => walk_import(visitor, i),
                Statement::ImportFrom(i) => walk_import_from(visitor, i),
                Statement::TypeAlias(t) => walk_type_alias(visitor, t),
                Statement::Assign(a) => walk_assign(visitor, a),
                Statement::AugAssign(a) => walk_aug_assign(visitor, a),
                Statement::Expr(e) => walk_expr(visitor, e),
                Statement::Return(r) => walk_return(visitor, r),
                Statement::If(i) => walk_if(visitor, i),
                Statement::For(f) => walk_for(visitor, f),
                Statement::While(w) => walk_while(visitor, w),
                Statement::Pass => VisitResult::Continue,
            };
            if inner_result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_statement(node);
    VisitResult::Continue
}

/// Walk a [`FunctionDef`] node.
///
/// Traversal order:
/// 1. Decorators (they precede the `def` keyword in source)
/// 2. `visit_function_def`
/// 3. Type parameters, parameters, return annotation, body
/// 4. `leave_function_def`
pub fn walk_function_def<V: Visitor>(visitor: &mut V, node: &FunctionDef) -> VisitResult {
    for dec in &node.decorators {
        if walk_decorator(visitor, dec) == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    let result = visitor.visit_function_def(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for tp in &node.type_params {
                if walk_type_param(visitor, tp) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            for param in &node.params {
                if walk_param(visitor, param) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            if walk_optional_expression(visitor, node.returns.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_function_def(node);
    VisitResult::Continue
}

/// Walk a [`ClassDef`] node.
///
/// Decorators are walked before `visit_class_def`, like [`walk_function_def`].
pub fn walk_class_def<V: Visitor>(visitor: &mut V, node: &ClassDef) -> VisitResult {
    for dec in &node.decorators {
        if walk_decorator(visitor, dec) == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    let result = visitor.visit_class_def(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for tp in &node.type_params {
                if walk_type_param(visitor, tp) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            for base in &node.bases {
                if walk_arg(visitor, base) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_class_def(node);
    VisitResult::Continue
}

/// Walk a [`Decorator`] node.
pub fn walk_decorator<V: Visitor>(visitor: &mut V, node: &Decorator) -> VisitResult {
    let result = visitor.visit_decorator(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.expression) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_decorator(node);
    VisitResult::Continue
}

/// Walk a [`Param`] node: name, annotation, default.
pub fn walk_param<V: Visitor>(visitor: &mut V, node: &Param) -> VisitResult {
    let result = visitor.visit_param(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_name(visitor, &node.name) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.annotation.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.default.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_param(node);
    VisitResult::Continue
}

/// Walk a [`TypeParam`] node: name, bound, default.
pub fn walk_type_param<V: Visitor>(visitor: &mut V, node: &TypeParam) -> VisitResult {
    let result = visitor.visit_type_param(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_name(visitor, &node.name) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.bound.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.default.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_type_param(node);
    VisitResult::Continue
}

/// Walk a [`TypeAlias`] node: alias name, type parameters, value.
pub fn walk_type_alias<V: Visitor>(visitor: &mut V, node: &TypeAlias) -> VisitResult {
    let result = visitor.visit_type_alias(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_name(visitor, &node.name) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            for tp in &node.type_params {
                if walk_type_param(visitor, tp) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_type_alias(node);
    VisitResult::Continue
}

// ============================================================================
// Import walks
// ============================================================================

/// Walk an [`Import`] node.
pub fn walk_import<V: Visitor>(visitor: &mut V, node: &Import) -> VisitResult {
    let result = visitor.visit_import_stmt(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for alias in &node.names {
                if walk_import_alias(visitor, alias) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_import_stmt(node);
    VisitResult::Continue
}

/// Walk an [`ImportAlias`] node (leaf: module path and alias are owned by it).
pub fn walk_import_alias<V: Visitor>(visitor: &mut V, node: &ImportAlias) -> VisitResult {
    let result = visitor.visit_import_alias(node);
    if result == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_import_alias(node);
    VisitResult::Continue
}

/// Walk an [`ImportFrom`] node.
pub fn walk_import_from<V: Visitor>(visitor: &mut V, node: &ImportFrom) -> VisitResult {
    let result = visitor.visit_import_from(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => match &node.names {
            ImportNames::Star => {
                // Import star has no children to walk
            }
            ImportNames::Aliases(aliases) => {
                for alias in aliases {
                    if walk_import_from_alias(visitor, alias) == VisitResult::Stop {
                        return VisitResult::Stop;
                    }
                }
            }
        },
    }
    visitor.leave_import_from(node);
    VisitResult::Continue
}

/// Walk an [`ImportFromAlias`] node. The alias, if any, is walked as a name.
pub fn walk_import_from_alias<V: Visitor>(visitor: &mut V, node: &ImportFromAlias) -> VisitResult {
    let result = visitor.visit_import_from_alias(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(asname) = &node.asname {
                if walk_name(visitor, asname) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_import_from_alias(node);
    VisitResult::Continue
}

// ============================================================================
// Simple and control-flow statement walks
// ============================================================================

/// Walk an [`Assign`] node: targets, annotation, value.
pub fn walk_assign<V: Visitor>(visitor: &mut V, node: &Assign) -> VisitResult {
    let result = visitor.visit_assign(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expressions(visitor, &node.targets) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.annotation.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_optional_expression(visitor, node.value.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_assign(node);
    VisitResult::Continue
}

/// Walk an [`AugAssign`] node.
pub fn walk_aug_assign<V: Visitor>(visitor: &mut V, node: &AugAssign) -> VisitResult {
    let result = visitor.visit_aug_assign(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.target) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_aug_assign(node);
    VisitResult::Continue
}

/// Walk an [`Expr`] statement.
pub fn walk_expr<V: Visitor>(visitor: &mut V, node: &Expr) -> VisitResult {
    let result = visitor.visit_expr(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_expr(node);
    VisitResult::Continue
}

/// Walk a [`Return`] node.
pub fn walk_return<V: Visitor>(visitor: &mut V, node: &Return) -> VisitResult {
    let result = visitor.visit_return_stmt(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_optional_expression(visitor, node.value.as_ref()) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_return_stmt(node);
    VisitResult::Continue
}

/// Walk an [`If`] node: test, body, else branch.
pub fn walk_if<V: Visitor>(visitor: &mut V, node: &If) -> VisitResult {
    let result = visitor.visit_if_stmt(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.test) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.orelse) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_if_stmt(node);
    VisitResult::Continue
}

/// Walk a [`For`] node: target, iterable, body, else branch.
pub fn walk_for<V: Visitor>(visitor: &mut V, node: &For) -> VisitResult {
    let result = visitor.visit_for_stmt(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.target) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expression(visitor, &node.iter) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.orelse) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_for_stmt(node);
    VisitResult::Continue
}

/// Walk a [`While`] node: test, body, else branch.
pub fn walk_while<V: Visitor>(visitor: &mut V, node: &While) -> VisitResult {
    let result = visitor.visit_while_stmt(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.test) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.body) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_statements(visitor, &node.orelse) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_while_stmt(node);
    VisitResult::Continue
}

// ============================================================================
// Expression walks
// ============================================================================

/// Walk an [`Expression`] node.
///
/// Dispatches to the specific expression walk.
pub fn walk_expression<V: Visitor>(visitor: &mut V, node: &Expression) -> VisitResult {
    let result = visitor.visit_expression(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner_result = match node {
                Expression::Name(n) => walk_name(visitor, n),
                Expression::Attribute(a) => walk_attribute(visitor, a),
                Expression::Call(c) => walk_call(visitor, c),
                Expression::Subscript(s) => walk_subscript(visitor, s),
                Expression::BinaryOperation(b) => walk_binary_operation(visitor, b),
                Expression::Tuple(t) => walk_tuple(visitor, t),
                Expression::List(l) => walk_list(visitor, l),
                Expression::Constant(c) => walk_constant(visitor, c),
            };
            if inner_result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_expression(node);
    VisitResult::Continue
}

/// Walk a [`Name`] node (leaf node).
pub fn walk_name<V: Visitor>(visitor: &mut V, node: &Name) -> VisitResult {
    let result = visitor.visit_name(node);
    if result == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_name(node);
    VisitResult::Continue
}

/// Walk an [`Attribute`] node: object, then member name.
pub fn walk_attribute<V: Visitor>(visitor: &mut V, node: &Attribute) -> VisitResult {
    let result = visitor.visit_attribute(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_name(visitor, &node.attr) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_attribute(node);
    VisitResult::Continue
}

/// Walk a [`Call`] node: callee, then arguments.
pub fn walk_call<V: Visitor>(visitor: &mut V, node: &Call) -> VisitResult {
    let result = visitor.visit_call(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.func) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            for arg in &node.args {
                if walk_arg(visitor, arg) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_call(node);
    VisitResult::Continue
}

/// Walk an [`Arg`] node: keyword name (if any), then value.
pub fn walk_arg<V: Visitor>(visitor: &mut V, node: &Arg) -> VisitResult {
    let result = visitor.visit_arg(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(keyword) = &node.keyword {
                if walk_name(visitor, keyword) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_arg(node);
    VisitResult::Continue
}

/// Walk a [`Subscript`] node: subscripted value, then slice elements.
pub fn walk_subscript<V: Visitor>(visitor: &mut V, node: &Subscript) -> VisitResult {
    let result = visitor.visit_subscript(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.value) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expressions(visitor, &node.slice) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_subscript(node);
    VisitResult::Continue
}

/// Walk a [`BinaryOperation`] node.
pub fn walk_binary_operation<V: Visitor>(visitor: &mut V, node: &BinaryOperation) -> VisitResult {
    let result = visitor.visit_binary_operation(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expression(visitor, &node.left) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expression(visitor, &node.right) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_binary_operation(node);
    VisitResult::Continue
}

/// Walk a [`Tuple`] node.
pub fn walk_tuple<V: Visitor>(visitor: &mut V, node: &Tuple) -> VisitResult {
    let result = visitor.visit_tuple(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expressions(visitor, &node.elements) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_tuple(node);
    VisitResult::Continue
}

/// Walk a [`List`] node.
pub fn walk_list<V: Visitor>(visitor: &mut V, node: &List) -> VisitResult {
    let result = visitor.visit_list(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expressions(visitor, &node.elements) == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_list(node);
    VisitResult::Continue
}

/// Walk a [`Constant`] node (leaf node).
pub fn walk_constant<V: Visitor>(visitor: &mut V, node: &Constant) -> VisitResult {
    let result = visitor.visit_constant(node);
    if result == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_constant(node);
    VisitResult::Continue
}
