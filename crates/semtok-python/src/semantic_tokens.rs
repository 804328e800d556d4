//! Semantic token classification.
//!
//! [`SemanticTokensWalker`] walks a [`Module`] in source order and appends a
//! [`TokenItem`] for every identifier whose role can be told apart from plain
//! lexical highlighting.
//!
//! Two kinds of classification happen:
//!
//! - **Syntactic**: declaration names (`def`, `class`), import module paths
//!   and `import ... as` aliases, and the `type` soft keyword are classified
//!   from grammar alone. These run even without a type engine.
//! - **Type-based**: every other name is classified by [`classify_name`]
//!   from its inferred type, falling back to symbol facts (declared type,
//!   finality) and the constant-name convention.
//!
//! A name with no inferred type, or one the engine reports as `Unknown` or
//! `Unbound`, produces no token: the lexical highlighting stands.
//!
//! # Usage
//!
//! ```
//! use semtok_cst::{builder::TreeBuilder, FunctionDef, Module, Statement};
//! use semtok_python::SemanticTokensWalker;
//!
//! let mut b = TreeBuilder::new("def run(): pass");
//! let module = Module::new(vec![Statement::FunctionDef(FunctionDef::new(b.name("run")))]);
//!
//! let items = SemanticTokensWalker::collect(&module, None);
//! assert_eq!(items.len(), 1);
//! assert_eq!((items[0].start, items[0].length), (4, 3));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use semtok_core::{ModifierSet, TokenItem, TokenKind, TokenModifier};
use semtok_cst::{
    walk_module, ClassDef, Expression, FunctionDef, ImportAlias, ImportFrom, ImportFromAlias,
    Module, Name, NodeId, Statement, TypeAlias, VisitResult, Visitor,
};

use crate::evaluator::TypeEvaluator;
use crate::names::is_constant_name;
use crate::types::{Type, TypeKind};

/// Length of the `type` soft keyword.
const TYPE_KEYWORD_LEN: u32 = 4;

/// Outcome of dispatching on a type's category.
enum Dispatch {
    /// The category alone decides the token.
    Token(TokenKind),
    /// No token for this name.
    Suppress,
    /// Decide from symbol facts and naming.
    Variable,
}

fn dispatch_category(ty: &Type) -> Dispatch {
    match &ty.kind {
        TypeKind::Function(function) => {
            if !ty.is_instance() {
                // An alias naming a callable shape.
                Dispatch::Token(TokenKind::Type)
            } else if function.is_method() {
                Dispatch::Token(TokenKind::Method)
            } else {
                Dispatch::Token(TokenKind::Function)
            }
        }
        TypeKind::OverloadedFunction(overloaded) => {
            if !ty.is_instance() {
                Dispatch::Token(TokenKind::Type)
            } else if overloaded.overloads.first().is_some_and(|f| f.is_method()) {
                Dispatch::Token(TokenKind::Method)
            } else {
                Dispatch::Token(TokenKind::Function)
            }
        }
        TypeKind::Module(_) => Dispatch::Token(TokenKind::Namespace),
        TypeKind::Unbound | TypeKind::Unknown => Dispatch::Suppress,
        TypeKind::TypeVar(_) if !ty.is_instance() => Dispatch::Token(TokenKind::TypeParameter),
        TypeKind::Union(_) if !ty.is_instance() => Dispatch::Token(TokenKind::Type),
        TypeKind::Class(_) if !ty.is_instance() => Dispatch::Token(TokenKind::Class),
        TypeKind::TypeVar(_) | TypeKind::Union(_) | TypeKind::Class(_) | TypeKind::Never => {
            Dispatch::Variable
        }
    }
}

/// Classify a name reference given the type to judge it by.
///
/// `ty` is usually the name's own inferred type; for `from m import a as b`
/// it is the type of the alias. Returns `None` when no token should be
/// emitted.
pub fn classify_name(
    evaluator: &dyn TypeEvaluator,
    node: &Name,
    ty: Option<&Type>,
) -> Option<(TokenKind, ModifierSet)> {
    let ty = ty?;
    match dispatch_category(ty) {
        Dispatch::Token(kind) => return Some((kind, ModifierSet::empty())),
        Dispatch::Suppress => return None,
        Dispatch::Variable => {}
    }

    let symbol = evaluator
        .look_up_symbol_recursive(node, &node.value, false)
        .map(|lookup| lookup.symbol);

    // The engine flags `Never` as both instance and instantiable. A symbol
    // without a declared type is taken to be an alias of `Never`, not a value.
    if matches!(ty.kind, TypeKind::Never) {
        if let Some(symbol) = symbol {
            if evaluator.declared_type_of_symbol(symbol).ty.is_none() {
                return Some((TokenKind::Type, ModifierSet::empty()));
            }
        }
    }

    if is_constant_name(&node.value) || symbol.is_some_and(|s| evaluator.is_final_variable(s)) {
        Some((TokenKind::Variable, ModifierSet::READONLY))
    } else {
        Some((TokenKind::Variable, ModifierSet::empty()))
    }
}

/// A visitor that collects semantic tokens for one module.
///
/// A walker is meant for a single traversal: create one per file, walk it,
/// then take the items with [`SemanticTokensWalker::into_items`].
pub struct SemanticTokensWalker<'e> {
    /// Type engine; `None` limits output to syntactic tokens.
    evaluator: Option<&'e dyn TypeEvaluator>,
    /// Set by the caller to stop the walk early.
    cancellation: Option<&'e AtomicBool>,
    /// Collected tokens, in traversal order.
    items: Vec<TokenItem>,
}

impl<'e> SemanticTokensWalker<'e> {
    pub fn new(evaluator: Option<&'e dyn TypeEvaluator>) -> Self {
        SemanticTokensWalker {
            evaluator,
            cancellation: None,
            items: Vec::new(),
        }
    }

    /// Stop the walk at the next node once `flag` is set.
    pub fn with_cancellation(mut self, flag: &'e AtomicBool) -> Self {
        self.cancellation = Some(flag);
        self
    }

    /// Walk `module`, appending to the collected items.
    ///
    /// Returns [`VisitResult::Stop`] if the walk was cancelled.
    pub fn walk(&mut self, module: &Module) -> VisitResult {
        tracing::debug!(
            statements = module.body.len(),
            has_evaluator = self.evaluator.is_some(),
            "semantic token walk started"
        );
        let before = self.items.len();
        let result = walk_module(self, module);
        tracing::debug!(
            tokens = self.items.len() - before,
            cancelled = result == VisitResult::Stop,
            "semantic token walk finished"
        );
        result
    }

    /// Walk `module` with a fresh walker and return its tokens.
    pub fn collect(module: &Module, evaluator: Option<&'e dyn TypeEvaluator>) -> Vec<TokenItem> {
        let mut walker = SemanticTokensWalker::new(evaluator);
        walker.walk(module);
        walker.into_items()
    }

    pub fn items(&self) -> &[TokenItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<TokenItem> {
        self.items
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn add_item(&mut self, start: u32, length: u32, kind: TokenKind, modifiers: ModifierSet) {
        tracing::trace!(start, length, kind = %kind, "token");
        self.items.push(TokenItem::new(start, length, kind, modifiers));
    }

    fn add_name(&mut self, name: &Name, kind: TokenKind, modifiers: ModifierSet) {
        self.add_item(name.start, name.length(), kind, modifiers);
    }

    /// Classify `node` by the type of `typed`.
    fn visit_name_with_type(&mut self, node: &Name, typed: NodeId) {
        let Some(evaluator) = self.evaluator else {
            tracing::trace!(name = %node.value, "no type engine");
            return;
        };
        let ty = evaluator.type_of(typed);
        match classify_name(evaluator, node, ty.as_ref()) {
            Some((kind, modifiers)) => self.add_name(node, kind, modifiers),
            None => {
                let reason = ty.as_ref().map_or("no type", |t| t.kind.category_name());
                tracing::trace!(name = %node.value, reason, "name suppressed");
            }
        }
    }
}

impl Visitor for SemanticTokensWalker<'_> {
    fn visit_statement(&mut self, _node: &Statement) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        VisitResult::Continue
    }

    fn visit_expression(&mut self, _node: &Expression) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        VisitResult::Continue
    }

    fn visit_class_def(&mut self, node: &ClassDef) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        self.add_name(
            &node.name,
            TokenKind::Class,
            ModifierSet::of(TokenModifier::Definition),
        );
        VisitResult::Continue
    }

    fn visit_function_def(&mut self, node: &FunctionDef) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        let mut modifiers = ModifierSet::of(TokenModifier::Definition);
        if node.is_async {
            modifiers.insert_modifier(TokenModifier::Async);
        }
        let kind = if node.is_method {
            TokenKind::Method
        } else {
            TokenKind::Function
        };
        // Parameters and the return annotation are plain names.
        self.add_name(&node.name, kind, modifiers);
        VisitResult::Continue
    }

    fn visit_import_alias(&mut self, node: &ImportAlias) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        for part in &node.module.parts {
            self.add_name(part, TokenKind::Namespace, ModifierSet::empty());
        }
        if let Some(asname) = &node.asname {
            self.add_name(asname, TokenKind::Namespace, ModifierSet::empty());
        }
        VisitResult::Continue
    }

    fn visit_import_from(&mut self, node: &ImportFrom) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        if let Some(module) = &node.module {
            for part in &module.parts {
                self.add_name(part, TokenKind::Namespace, ModifierSet::empty());
            }
        }
        VisitResult::Continue
    }

    fn visit_import_from_alias(&mut self, node: &ImportFromAlias) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        self.visit_name_with_type(&node.name, node.bound_name().id);
        VisitResult::Continue
    }

    fn visit_type_alias(&mut self, node: &TypeAlias) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        // Editors color `type` as a type reference; override it as a keyword.
        self.add_item(
            node.start,
            TYPE_KEYWORD_LEN,
            TokenKind::Keyword,
            ModifierSet::empty(),
        );
        VisitResult::Continue
    }

    fn visit_name(&mut self, node: &Name) -> VisitResult {
        if self.is_cancelled() {
            return VisitResult::Stop;
        }
        self.visit_name_with_type(node, node.id);
        VisitResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{DeclaredType, SymbolId, SymbolLookup};
    use crate::snapshot::TypeSnapshot;
    use crate::types::{FunctionDeclaration, FunctionType, TypeFlags};
    use pretty_assertions::assert_eq;
    use semtok_core::ModifierSet as M;
    use semtok_cst::builder::TreeBuilder;
    use semtok_cst::{Arg, Assign, Decorator, Expr, Import, ImportNames, Param, Return};

    fn item(start: u32, length: u32, kind: TokenKind, modifiers: ModifierSet) -> TokenItem {
        TokenItem::new(start, length, kind, modifiers)
    }

    fn module(body: Vec<Statement>) -> Module {
        Module::new(body)
    }

    fn expr_stmt(value: impl Into<Expression>) -> Statement {
        Statement::Expr(Expr {
            value: value.into(),
        })
    }

    fn run(module: &Module, snapshot: &TypeSnapshot) -> Vec<TokenItem> {
        let engine: &dyn TypeEvaluator = snapshot;
        SemanticTokensWalker::collect(module, Some(engine))
    }

    /// Classify a lone name `value` whose type is `ty`.
    fn classify_alone(value: &str, ty: Option<Type>) -> Option<(TokenKind, ModifierSet)> {
        let node = Name::new(NodeId(0), value, 0);
        let snapshot = TypeSnapshot::new();
        classify_name(&snapshot, &node, ty.as_ref())
    }

    fn overload(name: &str, is_method: bool) -> FunctionType {
        FunctionType {
            name: name.into(),
            declaration: Some(FunctionDeclaration { is_method }),
        }
    }

    // ------------------------------------------------------------------
    // Category dispatch
    // ------------------------------------------------------------------

    #[test]
    fn test_function_instance_is_function_or_method() {
        assert_eq!(
            classify_alone("f", Some(Type::function("f", false))),
            Some((TokenKind::Function, M::empty()))
        );
        assert_eq!(
            classify_alone("m", Some(Type::function("m", true))),
            Some((TokenKind::Method, M::empty()))
        );
    }

    #[test]
    fn test_function_without_declaration_is_function() {
        let ty = Type::new(
            TypeKind::Function(FunctionType {
                name: "cb".into(),
                declaration: None,
            }),
            TypeFlags::INSTANCE,
        );
        assert_eq!(
            classify_alone("cb", Some(ty)),
            Some((TokenKind::Function, M::empty()))
        );
    }

    #[test]
    fn test_callable_alias_is_type() {
        let alias = Type::function("Handler", false).into_instantiable();
        assert_eq!(
            classify_alone("Handler", Some(alias)),
            Some((TokenKind::Type, M::empty()))
        );
    }

    #[test]
    fn test_overloads_use_first_declaration() {
        let method_first = Type::overloaded(vec![overload("get", true), overload("get", false)]);
        assert_eq!(
            classify_alone("get", Some(method_first)),
            Some((TokenKind::Method, M::empty()))
        );

        let function_first = Type::overloaded(vec![overload("get", false), overload("get", true)]);
        assert_eq!(
            classify_alone("get", Some(function_first)),
            Some((TokenKind::Function, M::empty()))
        );

        let as_type = Type::overloaded(vec![overload("get", true)]).into_instantiable();
        assert_eq!(
            classify_alone("get", Some(as_type)),
            Some((TokenKind::Type, M::empty()))
        );
    }

    #[test]
    fn test_overloads_without_signatures_are_functions() {
        assert_eq!(
            classify_alone("f", Some(Type::overloaded(Vec::new()))),
            Some((TokenKind::Function, M::empty()))
        );
    }

    #[test]
    fn test_module_is_namespace_in_either_form() {
        assert_eq!(
            classify_alone("os", Some(Type::module("os"))),
            Some((TokenKind::Namespace, M::empty()))
        );
        assert_eq!(
            classify_alone("os", Some(Type::module("os").into_instantiable())),
            Some((TokenKind::Namespace, M::empty()))
        );
    }

    #[test]
    fn test_suppressed_categories() {
        assert_eq!(classify_alone("x", None), None);
        assert_eq!(classify_alone("x", Some(Type::unknown())), None);
        assert_eq!(classify_alone("x", Some(Type::unbound())), None);
        // Suppression wins over the constant convention.
        assert_eq!(classify_alone("MAX", Some(Type::unknown())), None);
    }

    #[test]
    fn test_type_var_forms() {
        assert_eq!(
            classify_alone("T", Some(Type::type_var("T"))),
            Some((TokenKind::TypeParameter, M::empty()))
        );
        // A value typed by a type variable is a variable.
        assert_eq!(
            classify_alone("item", Some(Type::type_var("T").into_instance())),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    #[test]
    fn test_union_forms() {
        let members = vec![Type::class("int"), Type::class("str")];
        assert_eq!(
            classify_alone("Key", Some(Type::union(members.clone()).into_instantiable())),
            Some((TokenKind::Type, M::empty()))
        );
        assert_eq!(
            classify_alone("key", Some(Type::union(members))),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    #[test]
    fn test_class_reference_duality() {
        assert_eq!(
            classify_alone("Path", Some(Type::class("Path"))),
            Some((TokenKind::Class, M::empty()))
        );
        assert_eq!(
            classify_alone("path", Some(Type::instance_of("Path"))),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    // ------------------------------------------------------------------
    // Variable fallback
    // ------------------------------------------------------------------

    #[test]
    fn test_constant_name_is_readonly() {
        assert_eq!(
            classify_alone("MAX_SIZE", Some(Type::instance_of("int"))),
            Some((TokenKind::Variable, M::READONLY))
        );
        assert_eq!(
            classify_alone("_", Some(Type::instance_of("int"))),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    #[test]
    fn test_final_symbol_is_readonly() {
        let mut snapshot = TypeSnapshot::new();
        let node = Name::new(NodeId(0), "limit", 0);
        let symbol = snapshot.add_symbol("limit", None, true);
        snapshot.bind(node.id, symbol);

        assert_eq!(
            classify_name(&snapshot, &node, Some(&Type::instance_of("int"))),
            Some((TokenKind::Variable, M::READONLY))
        );
    }

    #[test]
    fn test_unresolved_symbol_skips_finality() {
        // The symbol table says final, but the node is not bound to it.
        let mut snapshot = TypeSnapshot::new();
        snapshot.add_symbol("limit", None, true);
        let node = Name::new(NodeId(0), "limit", 0);
        assert_eq!(
            classify_name(&snapshot, &node, Some(&Type::instance_of("int"))),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    // The engine marks `Never` as both instance and instantiable, so the
    // declared type of the symbol decides. These cases pin down that
    // heuristic; they are not a general rule about `Never`.

    #[test]
    fn test_never_alias_without_declaration_is_type() {
        let mut snapshot = TypeSnapshot::new();
        let node = Name::new(NodeId(0), "Nothing", 0);
        let symbol = snapshot.add_symbol("Nothing", None, false);
        snapshot.bind(node.id, symbol);
        assert_eq!(
            classify_name(&snapshot, &node, Some(&Type::never())),
            Some((TokenKind::Type, M::empty()))
        );
    }

    #[test]
    fn test_never_value_with_declaration_is_variable() {
        let mut snapshot = TypeSnapshot::new();
        let node = Name::new(NodeId(0), "result", 0);
        let symbol = snapshot.add_symbol("result", Some(Type::never()), false);
        snapshot.bind(node.id, symbol);
        assert_eq!(
            classify_name(&snapshot, &node, Some(&Type::never())),
            Some((TokenKind::Variable, M::empty()))
        );
    }

    #[test]
    fn test_never_without_symbol_is_variable() {
        assert_eq!(
            classify_alone("NOTHING", Some(Type::never())),
            Some((TokenKind::Variable, M::READONLY))
        );
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    #[test]
    fn test_function_definition_run() {
        let mut b = TreeBuilder::new("def run(): pass");
        let def = FunctionDef::new(b.name("run"));
        let tree = module(vec![Statement::FunctionDef(def)]);

        assert_eq!(
            run(&tree, &TypeSnapshot::new()),
            vec![item(4, 3, TokenKind::Function, M::DEFINITION)]
        );
    }

    #[test]
    fn test_async_method_definition() {
        let source = "class Client:\n    async def fetch(self): pass";
        let mut b = TreeBuilder::new(source);
        let class_name = b.name("Client");
        let mut fetch = FunctionDef::new(b.name("fetch"));
        fetch.is_async = true;
        fetch.is_method = true;
        let self_param = b.name("self");
        fetch.params.push(Param::new(self_param.clone()));
        let mut class = ClassDef::new(class_name);
        class.body.push(Statement::FunctionDef(fetch));

        let snapshot = TypeSnapshot::new().with_type(self_param.id, Type::instance_of("Client"));
        assert_eq!(
            run(&module(vec![Statement::ClassDef(class)]), &snapshot),
            vec![
                item(6, 6, TokenKind::Class, M::DEFINITION),
                item(28, 5, TokenKind::Method, M::DEFINITION | M::ASYNC),
                item(34, 4, TokenKind::Variable, M::empty()),
            ]
        );
    }

    #[test]
    fn test_import_as() {
        let mut b = TreeBuilder::new("import pkg.sub as s");
        let alias = ImportAlias {
            module: b.dotted("pkg.sub"),
            asname: Some(b.name("s")),
        };
        let tree = module(vec![Statement::Import(Import { names: vec![alias] })]);

        // Import clauses never consult the engine.
        assert_eq!(
            SemanticTokensWalker::collect(&tree, None),
            vec![
                item(7, 3, TokenKind::Namespace, M::empty()),
                item(11, 3, TokenKind::Namespace, M::empty()),
                item(18, 1, TokenKind::Namespace, M::empty()),
            ]
        );
    }

    #[test]
    fn test_from_import_uses_alias_type() {
        let source = "from os.path import join as j, sep";
        let mut b = TreeBuilder::new(source);
        let module_path = b.dotted("os.path");
        let join = b.name("join");
        let j = b.name("j");
        let sep = b.name("sep");
        let snapshot = TypeSnapshot::new()
            .with_type(j.id, Type::function("join", false))
            .with_type(sep.id, Type::instance_of("str"));
        let tree = module(vec![Statement::ImportFrom(ImportFrom {
            relative: 0,
            module: Some(module_path),
            names: ImportNames::Aliases(vec![
                ImportFromAlias {
                    name: join,
                    asname: Some(j),
                },
                ImportFromAlias {
                    name: sep,
                    asname: None,
                },
            ]),
        })]);

        assert_eq!(
            run(&tree, &snapshot),
            vec![
                item(5, 2, TokenKind::Namespace, M::empty()),
                item(8, 4, TokenKind::Namespace, M::empty()),
                item(20, 4, TokenKind::Function, M::empty()),
                item(28, 1, TokenKind::Function, M::empty()),
                item(31, 3, TokenKind::Variable, M::empty()),
            ]
        );
    }

    #[test]
    fn test_relative_star_import_has_no_tokens() {
        let tree = module(vec![Statement::ImportFrom(ImportFrom {
            relative: 1,
            module: None,
            names: ImportNames::Star,
        })]);
        assert!(run(&tree, &TypeSnapshot::new()).is_empty());
    }

    #[test]
    fn test_type_alias_keyword() {
        let mut b = TreeBuilder::new("x = 1\ntype X = int");
        b.skip_id();
        b.constant("1");
        let start = b.keyword("type");
        let alias = TypeAlias {
            start,
            name: b.name("X"),
            type_params: Vec::new(),
            value: b.name("int").into(),
        };
        let tree = module(vec![Statement::TypeAlias(alias)]);

        // Without types only the keyword is emitted.
        assert_eq!(
            run(&tree, &TypeSnapshot::new()),
            vec![item(6, 4, TokenKind::Keyword, M::empty())]
        );
    }

    #[test]
    fn test_type_alias_names_are_classified_separately() {
        let mut b = TreeBuilder::new("type X = int");
        let start = b.keyword("type");
        let x = b.name("X");
        let int = b.name("int");
        let snapshot = TypeSnapshot::new()
            .with_type(x.id, Type::class("int"))
            .with_type(int.id, Type::class("int"));
        let tree = module(vec![Statement::TypeAlias(TypeAlias {
            start,
            name: x,
            type_params: Vec::new(),
            value: int.into(),
        })]);

        assert_eq!(
            run(&tree, &snapshot),
            vec![
                item(0, 4, TokenKind::Keyword, M::empty()),
                item(5, 1, TokenKind::Class, M::empty()),
                item(9, 3, TokenKind::Class, M::empty()),
            ]
        );
    }

    #[test]
    fn test_constant_assignment() {
        let mut b = TreeBuilder::new("MAX_SIZE = 10");
        let target = b.name("MAX_SIZE");
        let value = b.constant("10");
        let snapshot = TypeSnapshot::new().with_type(target.id, Type::instance_of("int"));
        let tree = module(vec![Statement::Assign(Assign {
            targets: vec![target.into()],
            annotation: None,
            value: Some(Expression::Constant(value)),
        })]);

        assert_eq!(
            run(&tree, &snapshot),
            vec![item(0, 8, TokenKind::Variable, M::READONLY)]
        );
    }

    // ------------------------------------------------------------------
    // Walk properties
    // ------------------------------------------------------------------

    /// `@cache\ndef area(r: float) -> float:\n    return PI * r * r`
    fn decorated_function() -> (Module, TypeSnapshot) {
        let source = "@cache\ndef area(r: float) -> float:\n    return PI * r * r";
        let mut b = TreeBuilder::new(source);
        let cache = b.name("cache");
        let mut def = FunctionDef::new(b.name("area"));
        def.decorators.push(Decorator {
            expression: cache.clone().into(),
        });
        let r = b.name("r");
        let float_ann = b.name("float");
        def.params
            .push(Param::new(r.clone()).with_annotation(float_ann.clone().into()));
        let float_ret = b.name("float");
        def.returns = Some(float_ret.clone().into());
        let pi = b.name("PI");
        let r1 = b.name("r");
        let r2 = b.name("r");
        def.body.push(Statement::Return(Return {
            value: Some(Expression::binary(
                Expression::binary(pi.clone().into(), r1.clone().into()),
                r2.clone().into(),
            )),
        }));

        let mut snapshot = TypeSnapshot::new()
            .with_type(cache.id, Type::function("cache", false))
            .with_type(float_ann.id, Type::class("float"))
            .with_type(float_ret.id, Type::class("float"))
            .with_type(pi.id, Type::instance_of("float"));
        for name in [&r, &r1, &r2] {
            snapshot.set_type(name.id, Type::instance_of("float"));
        }
        (module(vec![Statement::FunctionDef(def)]), snapshot)
    }

    #[test]
    fn test_tokens_follow_source_order() {
        let (tree, snapshot) = decorated_function();
        let items = run(&tree, &snapshot);

        assert_eq!(
            items,
            vec![
                item(1, 5, TokenKind::Function, M::empty()),
                item(11, 4, TokenKind::Function, M::DEFINITION),
                item(16, 1, TokenKind::Variable, M::empty()),
                item(19, 5, TokenKind::Class, M::empty()),
                item(29, 5, TokenKind::Class, M::empty()),
                item(47, 2, TokenKind::Variable, M::READONLY),
                item(52, 1, TokenKind::Variable, M::empty()),
                item(56, 1, TokenKind::Variable, M::empty()),
            ]
        );
        assert!(items.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn test_walk_is_idempotent() {
        let (tree, snapshot) = decorated_function();
        assert_eq!(run(&tree, &snapshot), run(&tree, &snapshot));
    }

    #[test]
    fn test_absent_engine_keeps_syntactic_tokens() {
        let (tree, _) = decorated_function();
        assert_eq!(
            SemanticTokensWalker::collect(&tree, None),
            vec![item(11, 4, TokenKind::Function, M::DEFINITION)]
        );
    }

    #[test]
    fn test_names_without_types_are_silent() {
        let mut b = TreeBuilder::new("print(value, sep=SEP)");
        let print = b.name("print");
        let value = b.name("value");
        let sep = b.name("sep");
        let sep_value = b.name("SEP");
        let call = Expression::call(
            print.into(),
            vec![
                Arg::positional(value.into()),
                Arg::keyword(sep, sep_value.clone().into()),
            ],
        );
        let snapshot = TypeSnapshot::new().with_type(sep_value.id, Type::unknown());

        assert!(run(&module(vec![expr_stmt(call)]), &snapshot).is_empty());
    }

    #[test]
    fn test_attribute_member_is_classified() {
        let mut b = TreeBuilder::new("os.getcwd()");
        let os = b.name("os");
        let getcwd = b.name("getcwd");
        let snapshot = TypeSnapshot::new()
            .with_type(os.id, Type::module("os"))
            .with_type(getcwd.id, Type::function("getcwd", false));
        let call = Expression::call(Expression::attribute(os.into(), getcwd), Vec::new());

        assert_eq!(
            run(&module(vec![expr_stmt(call)]), &snapshot),
            vec![
                item(0, 2, TokenKind::Namespace, M::empty()),
                item(3, 6, TokenKind::Function, M::empty()),
            ]
        );
    }

    #[test]
    fn test_cancelled_walk_stops() {
        let (tree, snapshot) = decorated_function();
        let engine: &dyn TypeEvaluator = &snapshot;
        let flag = AtomicBool::new(true);
        let mut walker = SemanticTokensWalker::new(Some(engine)).with_cancellation(&flag);

        assert_eq!(walker.walk(&tree), VisitResult::Stop);
        assert!(walker.items().is_empty());
    }

    #[test]
    fn test_uncancelled_walk_completes() {
        let (tree, snapshot) = decorated_function();
        let engine: &dyn TypeEvaluator = &snapshot;
        let flag = AtomicBool::new(false);
        let mut walker = SemanticTokensWalker::new(Some(engine)).with_cancellation(&flag);

        assert_eq!(walker.walk(&tree), VisitResult::Continue);
        assert_eq!(walker.into_items().len(), 8);
    }

    /// Sets the cancellation flag the first time a type is asked for.
    struct CancelOnQuery<'a> {
        inner: TypeSnapshot,
        flag: &'a AtomicBool,
    }

    impl TypeEvaluator for CancelOnQuery<'_> {
        fn type_of(&self, node: NodeId) -> Option<Type> {
            self.flag.store(true, Ordering::Relaxed);
            self.inner.type_of(node)
        }

        fn look_up_symbol_recursive(
            &self,
            node: &Name,
            name: &str,
            is_outer_scope: bool,
        ) -> Option<SymbolLookup> {
            self.inner.look_up_symbol_recursive(node, name, is_outer_scope)
        }

        fn declared_type_of_symbol(&self, symbol: SymbolId) -> DeclaredType {
            self.inner.declared_type_of_symbol(symbol)
        }

        fn is_final_variable(&self, symbol: SymbolId) -> bool {
            self.inner.is_final_variable(symbol)
        }
    }

    #[test]
    fn test_cancellation_between_import_aliases() {
        let mut b = TreeBuilder::new("from m import join, sep");
        let m = b.dotted("m");
        let join = b.name("join");
        let sep = b.name("sep");
        let flag = AtomicBool::new(false);
        let engine = CancelOnQuery {
            inner: TypeSnapshot::new()
                .with_type(join.id, Type::function("join", false))
                .with_type(sep.id, Type::instance_of("str")),
            flag: &flag,
        };
        let tree = module(vec![Statement::ImportFrom(ImportFrom {
            relative: 0,
            module: Some(m),
            names: ImportNames::Aliases(vec![
                ImportFromAlias {
                    name: join,
                    asname: None,
                },
                ImportFromAlias {
                    name: sep,
                    asname: None,
                },
            ]),
        })]);

        let engine: &dyn TypeEvaluator = &engine;
        let mut walker = SemanticTokensWalker::new(Some(engine)).with_cancellation(&flag);
        assert_eq!(walker.walk(&tree), VisitResult::Stop);
        // `join` was classified before the flag was seen; `sep` never is.
        assert_eq!(
            walker.into_items(),
            vec![
                item(5, 1, TokenKind::Namespace, M::empty()),
                item(14, 4, TokenKind::Function, M::empty()),
            ]
        );
    }

    #[test]
    fn test_dotted_import_without_alias() {
        let mut b = TreeBuilder::new("import a.b.c");
        let tree = module(vec![Statement::Import(Import {
            names: vec![ImportAlias {
                module: b.dotted("a.b.c"),
                asname: None,
            }],
        })]);
        let starts: Vec<u32> = run(&tree, &TypeSnapshot::new())
            .iter()
            .map(|t| t.start)
            .collect();
        assert_eq!(starts, vec![7, 9, 11]);
    }
}
