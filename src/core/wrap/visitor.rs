use anyhow::{Result, bail};
use swc_common::{BytePos, DUMMY_SP, Span};
use swc_ecma_ast::{
    ArrowExpr, CallExpr, Callee, Expr, ExprOrSpread, Function, Ident, JSXAttr, JSXAttrValue,
    JSXElementChild, JSXExpr, JSXExprContainer, KeyValueProp, Lit, ObjectLit, Prop, PropName,
    PropOrSpread, Str, Tpl, TplElement,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use super::{Pass, SiteKind, TranslationWrapper, WrappedSite};
use crate::core::parsers::printer::print_node;

/// Runs a single pass over a module.
///
/// Rewrites only happen while `depth > 0`, that is inside at least one
/// component. The first error stops every further rewrite in the pass.
pub(super) struct PassVisitor<'w, 'a> {
    wrapper: &'w TranslationWrapper<'a>,
    pass: Pass,
    depth: usize,
    sites: Vec<WrappedSite>,
    error: Option<anyhow::Error>,
}

impl<'w, 'a> PassVisitor<'w, 'a> {
    pub(super) fn new(wrapper: &'w TranslationWrapper<'a>, pass: Pass) -> Self {
        Self {
            wrapper,
            pass,
            depth: 0,
            sites: Vec::new(),
            error: None,
        }
    }

    pub(super) fn finish(self) -> Result<Vec<WrappedSite>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.sites),
        }
    }

    fn active(&self) -> bool {
        self.depth > 0 && self.error.is_none()
    }

    fn record(&mut self, kind: SiteKind, key: String, span: Span) {
        self.sites.push(WrappedSite { kind, key, span });
    }

    fn with_scope(&mut self, span: &Span, f: impl FnOnce(&mut Self)) {
        let is_context = self.wrapper.is_context(span);
        if is_context {
            self.depth += 1;
        }
        f(self);
        if is_context {
            self.depth -= 1;
        }
    }

    fn is_translation_call(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Call(call) if self.is_translation_callee(&call.callee))
    }

    fn is_translation_callee(&self, callee: &Callee) -> bool {
        match callee {
            Callee::Expr(expr) => {
                matches!(&**expr, Expr::Ident(ident) if &*ident.sym == self.wrapper.translation_fn())
            }
            _ => false,
        }
    }

    /// Whether `expr` is the kind of literal the current pass rewrites.
    fn is_site(&self, expr: &Expr) -> bool {
        match self.pass {
            Pass::StringLiteral => matches!(expr, Expr::Lit(Lit::Str(_))),
            Pass::TemplateLiteral => matches!(expr, Expr::Tpl(_)),
            Pass::JsxText => false,
        }
    }

    fn translation_call(&self, key: &str, values: Option<ObjectLit>) -> Expr {
        let callee = Ident::new_no_ctxt(self.wrapper.translation_fn().into(), DUMMY_SP);

        let mut args = vec![ExprOrSpread {
            spread: None,
            expr: Box::new(Expr::Lit(Lit::Str(str_lit(key)))),
        }];
        if let Some(values) = values {
            args.push(ExprOrSpread {
                spread: None,
                expr: Box::new(Expr::Object(values)),
            });
        }

        Expr::Call(CallExpr {
            span: DUMMY_SP,
            callee: Callee::Expr(Box::new(Expr::Ident(callee))),
            args,
            ..Default::default()
        })
    }

    fn translation_container(&self, key: &str) -> JSXExprContainer {
        JSXExprContainer {
            span: DUMMY_SP,
            expr: JSXExpr::Expr(Box::new(self.translation_call(key, None))),
        }
    }

    fn wrap_string_literal(&mut self, expr: &mut Expr) -> bool {
        let Expr::Lit(Lit::Str(s)) = expr else {
            return false;
        };
        let Some(value) = s.value.as_str() else {
            return false;
        };
        if !self.wrapper.classify(value) {
            return false;
        }

        let (span, key) = (s.span, value.to_string());
        *expr = self.translation_call(&key, None);
        self.record(SiteKind::StringLiteral, key, span);
        true
    }

    /// Returns the trimmed text of a JSX text child that should be wrapped.
    fn jsx_text_key(&self, child: &JSXElementChild) -> Option<(Span, String)> {
        let JSXElementChild::JSXText(text) = child else {
            return None;
        };
        let trimmed = text.value.trim();
        if trimmed.is_empty() || !self.wrapper.classify(trimmed) {
            return None;
        }
        // Point at the text itself rather than the whitespace before it.
        let leading = text.value.len() - text.value.trim_start().len();
        let span = Span::new(text.span.lo + BytePos(leading as u32), text.span.hi);
        Some((span, trimmed.to_string()))
    }

    fn wrap_template_literal(&mut self, expr: &mut Expr) -> Result<bool> {
        let Expr::Tpl(tpl) = expr else {
            return Ok(false);
        };
        let (key, labels) = template_key(tpl)?;
        if !self.wrapper.classify(&key) {
            return Ok(false);
        }

        let span = tpl.span;
        let exprs = std::mem::take(&mut tpl.exprs);
        let props = labels
            .into_iter()
            .zip(exprs)
            .filter_map(|(label, value)| {
                label.map(|label| {
                    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                        key: PropName::Str(str_lit(&label)),
                        value: unwrap_type_ascriptions(value),
                    })))
                })
            })
            .collect();

        *expr = self.translation_call(
            &key,
            Some(ObjectLit {
                span: DUMMY_SP,
                props,
            }),
        );
        self.record(SiteKind::TemplateLiteral, key, span);
        Ok(true)
    }
}

impl VisitMut for PassVisitor<'_, '_> {
    fn visit_mut_function(&mut self, node: &mut Function) {
        let span = node.span;
        self.with_scope(&span, |v| node.visit_mut_children_with(v));
    }

    fn visit_mut_arrow_expr(&mut self, node: &mut ArrowExpr) {
        let span = node.span;
        self.with_scope(&span, |v| node.visit_mut_children_with(v));
    }

    fn visit_mut_call_expr(&mut self, node: &mut CallExpr) {
        if self.error.is_some() {
            return;
        }
        if !self.is_translation_callee(&node.callee) {
            node.visit_mut_children_with(self);
            return;
        }

        // Direct arguments of a translation call are already wrapped; only
        // their interpolations may still hold literals.
        for arg in &mut node.args {
            if arg.spread.is_none() && self.is_site(&arg.expr) {
                let expr: &mut Expr = &mut arg.expr;
                expr.visit_mut_children_with(self);
            } else {
                arg.visit_mut_with(self);
            }
        }
    }

    fn visit_mut_expr(&mut self, node: &mut Expr) {
        if self.error.is_some() {
            return;
        }
        if self.active() {
            match self.pass {
                Pass::StringLiteral => {
                    if self.wrap_string_literal(node) {
                        return;
                    }
                }
                Pass::TemplateLiteral => {
                    // A replaced template is traversed again as a call so that
                    // templates moved into its arguments get their turn.
                    if let Err(err) = self.wrap_template_literal(node) {
                        self.error = Some(err);
                        return;
                    }
                }
                Pass::JsxText => {}
            }
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_attr(&mut self, node: &mut JSXAttr) {
        if self.active()
            && self.pass == Pass::StringLiteral
            && let Some(JSXAttrValue::Str(s)) = &node.value
            && let Some(value) = s.value.as_str()
            && self.wrapper.classify(value)
        {
            let (span, key) = (s.span, value.to_string());
            node.value = Some(JSXAttrValue::JSXExprContainer(
                self.translation_container(&key),
            ));
            self.record(SiteKind::JsxAttribute, key, span);
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_element_child(&mut self, node: &mut JSXElementChild) {
        if self.active() && self.pass == Pass::JsxText {
            if let JSXElementChild::JSXExprContainer(container) = node
                && let JSXExpr::Expr(expr) = &container.expr
                && self.is_translation_call(expr)
            {
                // Only the call's own slot counts as wrapped; markup passed
                // in its arguments still gets its text wrapped.
                node.visit_mut_children_with(self);
                return;
            }
            if let Some((span, key)) = self.jsx_text_key(node) {
                *node = JSXElementChild::JSXExprContainer(self.translation_container(&key));
                self.record(SiteKind::JsxText, key, span);
                return;
            }
        }
        node.visit_mut_children_with(self);
    }
}

/// Build the key of a template literal.
///
/// Returns the key and, per interpolation, the label used in the values
/// object (`None` for an interpolation without a runtime value).
fn template_key(tpl: &Tpl) -> Result<(String, Vec<Option<String>>)> {
    if tpl.quasis.len() != tpl.exprs.len() + 1 {
        bail!(
            "Malformed template literal at {:?}: {} quasis for {} expressions",
            tpl.span,
            tpl.quasis.len(),
            tpl.exprs.len()
        );
    }

    let mut key = String::new();
    let mut labels = Vec::with_capacity(tpl.exprs.len());
    for (quasi, expr) in tpl.quasis.iter().zip(&tpl.exprs) {
        key.push_str(quasi_text(quasi));

        let value = peel_type_ascriptions(expr);
        if is_runtime_expr(value) {
            let source = print_node(value)?;
            key.push_str("{{");
            key.push_str(&source);
            key.push_str("}}");
            labels.push(Some(source));
        } else {
            key.push_str("{{}}");
            labels.push(None);
        }
    }
    if let Some(last) = tpl.quasis.last() {
        key.push_str(quasi_text(last));
    }

    Ok((key, labels))
}

/// Decoded text of a template segment; falls back to the raw text when the
/// segment has an invalid escape and no cooked value.
fn quasi_text(quasi: &TplElement) -> &str {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .unwrap_or(&*quasi.raw)
}

/// `Invalid` is the only value-less node a template slot can hold (parser
/// recovery); it gets an empty placeholder and no entry in the values object.
fn is_runtime_expr(expr: &Expr) -> bool {
    !matches!(expr, Expr::Invalid(_))
}

fn type_ascription_inner(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::TsAs(e) => Some(&*e.expr),
        Expr::TsSatisfies(e) => Some(&*e.expr),
        Expr::TsTypeAssertion(e) => Some(&*e.expr),
        Expr::TsConstAssertion(e) => Some(&*e.expr),
        Expr::TsNonNull(e) => Some(&*e.expr),
        Expr::Paren(e) if type_ascription_inner(&e.expr).is_some() => Some(&*e.expr),
        _ => None,
    }
}

fn peel_type_ascriptions(mut expr: &Expr) -> &Expr {
    while let Some(inner) = type_ascription_inner(expr) {
        expr = inner;
    }
    expr
}

fn unwrap_type_ascriptions(mut expr: Box<Expr>) -> Box<Expr> {
    loop {
        if type_ascription_inner(&expr).is_none() {
            return expr;
        }
        expr = match *expr {
            Expr::TsAs(e) => e.expr,
            Expr::TsSatisfies(e) => e.expr,
            Expr::TsTypeAssertion(e) => e.expr,
            Expr::TsConstAssertion(e) => e.expr,
            Expr::TsNonNull(e) => e.expr,
            Expr::Paren(e) => e.expr,
            other => return Box::new(other),
        };
    }
}

fn str_lit(value: &str) -> Str {
    Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}
