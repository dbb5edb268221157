//! Rewrites translatable literals inside components into translation calls.
//!
//! Three passes run in a fixed order over every component located in a module:
//!
//! 1. string literals: `"안녕"` becomes `t("안녕")`, and attribute values
//!    `title="안녕"` become `title={t("안녕")}`
//! 2. JSX text: `<p> 안녕 </p>` becomes `<p>{t("안녕")}</p>`
//! 3. template literals: `` `안녕, ${name}!` `` becomes
//!    `t("안녕, {{name}}!", { "name": name })`
//!
//! A literal that already is the direct argument of a translation call is
//! left alone, so wrapping a module twice changes nothing the second time.

mod visitor;


use std::collections::HashSet;

use anyhow::Result;
use swc_common::Span;
use swc_ecma_ast::Module;
use swc_ecma_visit::VisitMutWith;

use crate::core::classifier::TextClassifier;
use crate::core::locator::ComponentContext;
use visitor::PassVisitor;

pub const DEFAULT_TRANSLATION_FN: &str = "t";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Name of the translation function, used both to build calls and to
    /// recognize calls that already exist.
    pub translation_fn: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            translation_fn: DEFAULT_TRANSLATION_FN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SiteKind {
    /// String literal in expression position.
    StringLiteral,
    /// String literal used as a JSX attribute value.
    JsxAttribute,
    /// Text directly inside a JSX element or fragment.
    JsxText,
    /// Template literal with or without interpolations.
    TemplateLiteral,
}

impl SiteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKind::StringLiteral => "string",
            SiteKind::JsxAttribute => "attribute",
            SiteKind::JsxText => "jsx-text",
            SiteKind::TemplateLiteral => "template",
        }
    }
}

/// One literal that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedSite {
    pub kind: SiteKind,
    /// Key passed as the first argument of the generated call.
    pub key: String,
    /// Span of the original literal.
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    StringLiteral,
    JsxText,
    TemplateLiteral,
}

impl Pass {
    pub(crate) const ORDER: [Pass; 3] = [Pass::StringLiteral, Pass::JsxText, Pass::TemplateLiteral];
}

pub struct TranslationWrapper<'a> {
    contexts: HashSet<Span>,
    classifier: &'a dyn TextClassifier,
    options: &'a WrapOptions,
}

impl<'a> TranslationWrapper<'a> {
    pub fn new(
        contexts: &[ComponentContext],
        classifier: &'a dyn TextClassifier,
        options: &'a WrapOptions,
    ) -> Self {
        Self {
            contexts: contexts.iter().map(|c| c.span).collect(),
            classifier,
            options,
        }
    }

    /// Run all passes over `module`, mutating it in place.
    ///
    /// Returns the rewritten sites in pass order. On error (a malformed
    /// template literal) the module keeps the rewrites made so far.
    pub fn wrap(&self, module: &mut Module) -> Result<Vec<WrappedSite>> {
        let mut sites = Vec::new();
        if self.contexts.is_empty() {
            return Ok(sites);
        }

        for pass in Pass::ORDER {
            let mut visitor = PassVisitor::new(self, pass);
            module.visit_mut_with(&mut visitor);
            sites.extend(visitor.finish()?);
        }
        Ok(sites)
    }

    pub(crate) fn is_context(&self, span: &Span) -> bool {
        self.contexts.contains(span)
    }

    pub(crate) fn classify(&self, text: &str) -> bool {
        self.classifier.classify(text)
    }

    pub(crate) fn translation_fn(&self) -> &str {
        &self.options.translation_fn
    }
}
