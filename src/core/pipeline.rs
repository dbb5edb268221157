//! Single-file pipeline: parse, locate components, wrap literals, print.

use anyhow::{Context, Result};
use swc_common::SourceMap;

use crate::core::{
    classifier::TextClassifier,
    locator::{ComponentContext, locate_components},
    parsers::{jsx::parse_jsx_source, printer::print_module},
    wrap::{SiteKind, TranslationWrapper, WrapOptions, WrappedSite},
};

/// A wrapped literal with its position in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocation {
    pub kind: SiteKind,
    pub key: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based display column.
    pub col: usize,
    pub source_line: String,
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file_path: String,
    pub components: Vec<ComponentContext>,
    /// Wrapped literals, ordered by position.
    pub sites: Vec<SiteLocation>,
    /// Rewritten source, `None` when nothing was wrapped.
    pub output: Option<String>,
}

impl FileOutcome {
    pub fn is_changed(&self) -> bool {
        self.output.is_some()
    }
}

pub fn wrap_source(
    code: String,
    file_path: &str,
    options: &WrapOptions,
    classifier: &dyn TextClassifier,
) -> Result<FileOutcome> {
    let mut parsed = parse_jsx_source(code, file_path)?;

    let components = locate_components(&parsed.module);
    let wrapped = TranslationWrapper::new(&components, classifier, options)
        .wrap(&mut parsed.module)
        .with_context(|| format!("Failed to wrap literals in {}", file_path))?;

    let output = if wrapped.is_empty() {
        None
    } else {
        Some(print_module(&parsed).with_context(|| format!("Failed to print {}", file_path))?)
    };

    let mut sites: Vec<SiteLocation> = wrapped
        .into_iter()
        .map(|site| locate_site(&parsed.source_map, site))
        .collect();
    sites.sort_by_key(|s| (s.line, s.col));

    Ok(FileOutcome {
        file_path: file_path.to_string(),
        components,
        sites,
        output,
    })
}

fn locate_site(source_map: &SourceMap, site: WrappedSite) -> SiteLocation {
    let loc = source_map.lookup_char_pos(site.span.lo);
    let source_line = loc
        .file
        .get_line(loc.line - 1)
        .map(|cow| cow.to_string())
        .unwrap_or_default();

    SiteLocation {
        kind: site.kind,
        key: site.key,
        line: loc.line,
        col: loc.col_display + 1,
        source_line,
    }
}
