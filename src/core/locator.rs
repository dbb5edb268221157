//! Finds React function components, the scopes in which text gets wrapped.
//!
//! A function is a component when it has a capitalized display name and its
//! body produces JSX. Arrow functions borrow the name of the variable they
//! are assigned to.

use std::fmt;

use swc_common::Span;
use swc_ecma_ast::{
    ArrowExpr, Expr, FnDecl, FnExpr, Function, JSXElement, JSXFragment, Module, Pat, Stmt,
    VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Declaration,
    Expression,
    Arrow,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentKind::Declaration => "function",
            ComponentKind::Expression => "function expression",
            ComponentKind::Arrow => "arrow function",
        };
        f.write_str(s)
    }
}

/// A function body identified as a UI component.
///
/// `span` is the span of the `Function` (declarations and expressions) or of
/// the `ArrowExpr`, and identifies the node for the wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentContext {
    pub name: String,
    pub kind: ComponentKind,
    pub span: Span,
}

/// Collect every component in `module`, outer components before nested ones.
pub fn locate_components(module: &Module) -> Vec<ComponentContext> {
    let mut locator = ComponentLocator::default();
    module.visit_with(&mut locator);
    locator.components
}

#[derive(Default)]
struct ComponentLocator {
    components: Vec<ComponentContext>,
}

impl ComponentLocator {
    fn consider<N>(&mut self, name: &str, kind: ComponentKind, span: Span, body: &N)
    where
        N: VisitWith<MarkupFinder>,
    {
        if is_component_name(name) && produces_markup(body) {
            self.components.push(ComponentContext {
                name: name.to_string(),
                kind,
                span,
            });
        }
    }

    fn consider_function(&mut self, name: &str, kind: ComponentKind, function: &Function) {
        self.consider(name, kind, function.span, function);
    }
}

impl Visit for ComponentLocator {
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.consider_function(&node.ident.sym, ComponentKind::Declaration, &node.function);
        node.visit_children_with(self);
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        if let Some(ident) = &node.ident {
            self.consider_function(&ident.sym, ComponentKind::Expression, &node.function);
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Pat::Ident(binding) = &node.name
            && let Some(arrow) = node.init.as_deref().and_then(as_arrow)
        {
            self.consider(&binding.id.sym, ComponentKind::Arrow, arrow.span, arrow);
        }
        node.visit_children_with(self);
    }
}

fn as_arrow(expr: &Expr) -> Option<&ArrowExpr> {
    match expr {
        Expr::Arrow(arrow) => Some(arrow),
        Expr::Paren(paren) => as_arrow(&paren.expr),
        _ => None,
    }
}

fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn produces_markup<N: VisitWith<MarkupFinder>>(node: &N) -> bool {
    let mut finder = MarkupFinder::default();
    node.visit_with(&mut finder);
    finder.found
}

/// Stops descending as soon as one JSX element or fragment has been seen.
#[derive(Default)]
struct MarkupFinder {
    found: bool,
}

impl Visit for MarkupFinder {
    fn visit_jsx_element(&mut self, _: &JSXElement) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _: &JSXFragment) {
        self.found = true;
    }

    fn visit_expr(&mut self, node: &Expr) {
        if !self.found {
            node.visit_children_with(self);
        }
    }

    fn visit_stmt(&mut self, node: &Stmt) {
        if !self.found {
            node.visit_children_with(self);
        }
    }
}
