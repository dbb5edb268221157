use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        classifier::ScriptClassifier,
        file_scanner::scan_files,
        pipeline::{FileOutcome, wrap_source},
        wrap::WrapOptions,
    },
};

/// A source file that could not be read, parsed, or rewritten.
#[derive(Debug, Clone)]
pub struct FileError {
    pub file_path: String,
    pub error: String,
}

/// Results of running the pipeline over every scanned file.
#[derive(Debug, Default)]
pub struct WrapResults {
    /// One outcome per successfully processed file, in file order.
    pub outcomes: Vec<FileOutcome>,
    pub errors: Vec<FileError>,
}

impl WrapResults {
    pub fn changed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_changed())
    }

    pub fn site_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.sites.len()).sum()
    }
}

/// Configuration, file list and classifier for one run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--translation-fn i18n`)
/// 2. `.twraprc.json` config file
/// 3. Built-in defaults
pub struct WrapContext {
    /// Source files to process (TSX/JSX/TS/JS), sorted.
    pub files: Vec<String>,

    pub options: WrapOptions,

    pub classifier: ScriptClassifier,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl WrapContext {
    /// Create a new `WrapContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file or a CLI override is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref translation_fn) = common_args.translation_fn {
            config.translation_fn = translation_fn.clone();
        }
        if !common_args.scripts.is_empty() {
            config.scripts = common_args.scripts.clone();
        }
        config.validate()?;

        // CLI --source-root decides where the config is searched; the
        // config's own sourceRoot is relative to it.
        let scan_dir = scan_root(&root_dir, &config.source_root);
        let scan_dir = scan_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_dir))?;
        let scan_result = scan_files(
            scan_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let classifier = ScriptClassifier::new(&config.scripts, &config.ignore_texts)?;
        let options = WrapOptions {
            translation_fn: config.translation_fn.clone(),
        };

        Ok(Self {
            files: scan_result.files,
            options,
            classifier,
            verbose,
        })
    }

    /// Read, parse, wrap and print every file in parallel.
    ///
    /// Each file is handled start to finish by one worker; nothing is
    /// written to disk here.
    pub fn wrap_files(&self) -> WrapResults {
        let results: Vec<(String, Result<FileOutcome>)> = self
            .files
            .par_iter()
            .map(|file_path| {
                let result = std::fs::read_to_string(file_path)
                    .map_err(|e| anyhow!("Failed to read file: {}", e))
                    .and_then(|code| {
                        wrap_source(code, file_path, &self.options, &self.classifier)
                    });
                (file_path.clone(), result)
            })
            .collect();

        let mut wrap_results = WrapResults::default();
        for (file_path, result) in results {
            match result {
                Ok(outcome) => wrap_results.outcomes.push(outcome),
                Err(e) => {
                    if self.verbose {
                        eprintln!("Warning: {} - {:#}", file_path, e);
                    }
                    wrap_results.errors.push(FileError {
                        file_path,
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        wrap_results
    }
}

/// Join the config's `sourceRoot` onto the root directory, dropping `.`
/// segments so reported paths read `./src/app.tsx` rather than `././src/app.tsx`.
fn scan_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let joined: PathBuf = root_dir
        .join(source_root)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if joined.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        joined
    }
}
