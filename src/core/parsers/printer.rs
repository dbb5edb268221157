//! Code generation for rewritten trees.
//!
//! Output keeps non-ASCII text verbatim so translated keys stay readable.

use std::sync::Arc;

use anyhow::{Context, Result};
use swc_common::{SourceMap, comments::Comments};
use swc_ecma_ast::EsVersion;
use swc_ecma_codegen::{Config, Emitter, Node, text_writer::JsWriter};

use super::jsx::ParsedJSX;

/// Print a parsed (and possibly rewritten) module back to source, keeping its comments.
pub fn print_module(parsed: &ParsedJSX) -> Result<String> {
    emit(
        &parsed.module,
        parsed.source_map.clone(),
        Some(&parsed.comments),
    )
}

/// Render a single node (usually an expression) to source text, without comments.
pub fn print_node<N: Node>(node: &N) -> Result<String> {
    emit(node, Arc::new(SourceMap::default()), None)
}

fn emit<N: Node>(
    node: &N,
    source_map: Arc<SourceMap>,
    comments: Option<&dyn Comments>,
) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut emitter = Emitter {
            cfg: Config::default()
                .with_target(EsVersion::latest())
                .with_ascii_only(false),
            cm: source_map.clone(),
            comments,
            wr: JsWriter::new(source_map, "\n", &mut buf, None),
        };
        node.emit_with(&mut emitter)
            .context("Failed to generate code")?;
    }
    String::from_utf8(buf).context("Generated code is not valid UTF-8")
}
