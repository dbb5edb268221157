use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed JSX/TSX file, ready to be located, rewritten and printed back.
///
/// `comments` is single-threaded: a `ParsedJSX` stays on the worker that
/// parsed it.
pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub comments: SingleThreadedComments,
}

/// Parse JSX/TSX source code string into an AST.
///
/// Every file is parsed as TSX so plain `.js`/`.jsx` sources work too.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;

        Ok(ParsedJSX {
            module,
            source_map,
            comments,
        })
    })
}
