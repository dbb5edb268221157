use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};

use super::super::{
    args::WrapCommand,
    exit_status::ExitStatus,
    report::{
        print_applied_summary_to, print_components_to, print_dry_run_summary_to,
        print_file_errors_to, print_parse_warning_to, print_success_to, report_sites_to,
    },
};
use crate::core::{WrapContext, pipeline::FileOutcome};

/// Run the wrap command.
///
/// In dry-run mode the literals that would be wrapped are listed and the
/// command exits with `Failure` when there is anything to do. With `--apply`
/// every changed file is rewritten in place.
pub fn wrap(cmd: WrapCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let ctx = WrapContext::new(&args.common)?;
    let results = ctx.wrap_files();

    let stdout = &mut io::stdout().lock();
    let stderr = &mut io::stderr().lock();

    if ctx.verbose {
        for outcome in &results.outcomes {
            print_components_to(outcome, stderr);
        }
    }

    let changed: Vec<&FileOutcome> = results.changed().collect();
    let site_count = results.site_count();

    if changed.is_empty() {
        if results.errors.is_empty() {
            print_success_to(ctx.files.len(), stdout);
        }
    } else {
        report_sites_to(&changed, stdout);

        if args.apply {
            for outcome in &changed {
                if let Some(output) = &outcome.output {
                    fs::write(&outcome.file_path, output)
                        .with_context(|| format!("Failed to write {}", outcome.file_path))?;
                }
            }
            let _ = writeln!(stdout);
            print_applied_summary_to(site_count, changed.len(), stdout);
        } else {
            print_dry_run_summary_to(site_count, changed.len(), stdout);
        }
    }

    if ctx.verbose {
        print_file_errors_to(&results.errors, stderr);
    } else {
        print_parse_warning_to(results.errors.len(), ctx.verbose, stderr);
    }

    Ok(ExitStatus::for_wrap(
        results.errors.len(),
        site_count,
        args.apply,
    ))
}
