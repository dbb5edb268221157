use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files, sorted so runs are reproducible.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Paths to leave out of a scan.
struct Ignores {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl Ignores {
    fn new(base_dir: &str, ignore_patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if !is_glob_pattern(p) {
                literal_paths.push(Path::new(base_dir).join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) if verbose => {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                Err(_) => {}
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.literal_paths.iter().any(|ignored| path.starts_with(ignored))
            || self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Resolve `includes` to the directories to walk.
///
/// An empty list means the whole base directory.
fn include_dirs(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![Path::new(base_dir).to_path_buf()];
    }

    let mut dirs = Vec::new();
    for inc in includes {
        let path = Path::new(base_dir).join(inc);
        if !is_glob_pattern(inc) {
            if path.exists() {
                dirs.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }

        match glob(&path.to_string_lossy()) {
            Ok(entries) => dirs.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) if verbose => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    "warning:".bold().yellow(),
                    inc,
                    e
                );
            }
            Err(_) => {}
        }
    }
    dirs
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let ignores = Ignores::new(base_dir, ignore_patterns, ignore_test_files, verbose);
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    for dir in include_dirs(base_dir, includes, verbose) {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if ignores.matches(path) {
                continue;
            }
            if path.is_file() && is_scannable_file(path) {
                files.push(path.to_string_lossy().into());
            }
        }
    }

    // Overlapping includes may yield the same file twice.
    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".d.ts"))
    {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
