use std::process::ExitCode;

/// How a twrap run ended.
///
/// A dry run that still finds literals to wrap is a `Failure`, so `twrap wrap`
/// can gate CI the way a linter does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing left to wrap, files rewritten, or config created.
    Success,
    /// Dry run found literals to wrap, or `init` found an existing config.
    Failure,
    /// Bad config, or a file that could not be read, parsed or rewritten.
    Error,
}

impl ExitStatus {
    /// Status of a `wrap` run. File errors win over pending rewrites.
    pub fn for_wrap(error_count: usize, pending_sites: usize, apply: bool) -> Self {
        if error_count > 0 {
            ExitStatus::Error
        } else if pending_sites > 0 && !apply {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
