// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definition for tree traversal.

use crate::nodes::{
    // Module
    Module,
    // Statements
    Statement, FunctionDef, ClassDef, Decorator, Param, TypeParam, TypeAlias, Import,
    ImportAlias, ImportFrom, ImportFromAlias, Assign, AugAssign, Expr, Return, If, For, While,
    // Expressions
    Expression, Name, Attribute, Call, Arg, Subscript, BinaryOperation, Tuple, List, Constant,
};

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the walker
/// proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called. The walk
    /// function will return immediately.
    Stop,
}

/// Macro to generate visitor trait method signatures.
///
/// This macro generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that return `VisitResult::Continue` and do nothing, respectively.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_name and leave_name for Name
///     name: Name,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited. Called even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Read-only traversal hooks.
///
/// - Return `VisitResult::Continue` to traverse into children
/// - Return `VisitResult::SkipChildren` to skip children (but `leave_*` still called)
/// - Return `VisitResult::Stop` to halt traversal immediately
///
/// Overriding a hook does not change what the walker descends into: children
/// are walked by the `walk_*` functions after the hook returns `Continue`.
///
/// # Example
///
/// ```
/// use semtok_cst::visitor::{Visitor, VisitResult};
/// use semtok_cst::Name;
///
/// struct NameCollector {
///     names: Vec<String>,
/// }
///
/// impl Visitor for NameCollector {
///     fn visit_name(&mut self, node: &Name) -> VisitResult {
///         self.names.push(node.value.clone());
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait Visitor {
    // Module
    visitor_methods! {
        module: Module,
        statement: Statement,
    }

    // Declarations
    visitor_methods! {
        function_def: FunctionDef,
        class_def: ClassDef,
        decorator: Decorator,
        param: Param,
        type_param: TypeParam,
        type_alias: TypeAlias,
    }

    // Imports
    visitor_methods! {
        import_stmt: Import,
        import_alias: ImportAlias,
        import_from: ImportFrom,
        import_from_alias: ImportFromAlias,
    }

    // Simple and control-flow statements
    visitor_methods! {
        assign: Assign,
        aug_assign: AugAssign,
        expr: Expr,
        return_stmt: Return,
        if_stmt: If,
        for_stmt: For,
        while_stmt: While,
    }

    // Expressions
    visitor_methods! {
        expression: Expression,
        name: Name,
        attribute: Attribute,
        call: Call,
        arg: Arg,
        subscript: Subscript,
        binary_operation: BinaryOperation,
        tuple: Tuple,
        list: List,
        constant: Constant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeId;

    struct NameCounter {
        count: usize,
    }

    impl Visitor for NameCounter {
        fn visit_name(&mut self, _node: &Name) -> VisitResult {
            self.count += 1;
            VisitResult::Continue
        }
    }

    #[test]
    fn test_visit_result_default() {
        assert_eq!(VisitResult::default(), VisitResult::Continue);
    }

    #[test]
    fn test_default_hooks_continue() {
        struct Nothing;
        impl Visitor for Nothing {}

        let mut v = Nothing;
        let name = Name::new(NodeId(0), "x", 0);
        assert_eq!(v.visit_name(&name), VisitResult::Continue);
        assert_eq!(v.visit_module(&Module::default()), VisitResult::Continue);
    }

    #[test]
    fn test_override_is_called() {
        let mut v = NameCounter { count: 0 };
        let name = Name::new(NodeId(0), "x", 0);
        v.visit_name(&name);
        v.visit_name(&name);
        assert_eq!(v.count, 2);
    }
}
