//! Report formatting and printing utilities.
//!
//! Wrapped literals are displayed in cargo-style format. Kept separate from
//! core logic so twrap can be used as a library.

use std::io::Write;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{
    FileError,
    pipeline::{FileOutcome, SiteLocation},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print wrapped literals to a custom writer.
pub fn report_sites_to<W: Write>(outcomes: &[&FileOutcome], writer: &mut W) {
    let max_line_width = outcomes
        .iter()
        .flat_map(|o| o.sites.iter())
        .map(|s| s.line.to_string().len())
        .max()
        .unwrap_or(1);

    for outcome in outcomes {
        for site in &outcome.sites {
            print_site(&outcome.file_path, site, writer, max_line_width);
        }
    }
}

/// Print the components found in a file (verbose mode).
pub fn print_components_to<W: Write>(outcome: &FileOutcome, writer: &mut W) {
    if outcome.components.is_empty() {
        return;
    }
    let names: Vec<String> = outcome
        .components
        .iter()
        .map(|c| format!("{} ({})", c.name, c.kind))
        .collect();
    let _ = writeln!(
        writer,
        "{} {}: {}",
        "components".dimmed(),
        outcome.file_path,
        names.join(", ")
    );
}

/// Print the dry-run summary.
pub fn print_dry_run_summary_to<W: Write>(site_count: usize, file_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {} literal(s) in {} file(s).",
        "Would wrap".yellow().bold(),
        site_count,
        file_count
    );
    let _ = writeln!(
        writer,
        "Run with {} to rewrite these files.",
        "--apply".cyan()
    );
}

/// Print the summary after files were rewritten.
pub fn print_applied_summary_to<W: Write>(site_count: usize, file_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {} literal(s) in {} file(s).",
        SUCCESS_MARK.green(),
        "Wrapped".green().bold(),
        site_count,
        file_count
    );
}

/// Print a success message when nothing needs wrapping.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - nothing to wrap",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print files that could not be processed.
pub fn print_file_errors_to<W: Write>(errors: &[FileError], writer: &mut W) {
    for FileError { file_path, error } in errors {
        let _ = writeln!(writer, "{}: {}", "error".bold().red(), error);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }
    if !errors.is_empty() {
        let _ = writeln!(
            writer,
            "\n{} {} file(s) could not be processed",
            FAILURE_MARK.red(),
            errors.len()
        );
    }
}

/// Print a warning about files that could not be processed.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_site<W: Write>(file_path: &str, site: &SiteLocation, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "wrap".bold().yellow(),
        site.key,
        site.kind.as_str().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        file_path,
        site.line,
        site.col
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        site.line.to_string().blue(),
        "|".blue(),
        site.source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = site
        .source_line
        .chars()
        .take(site.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );
}
