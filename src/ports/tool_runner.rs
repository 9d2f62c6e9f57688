use std::path::Path;

use crate::error::AppError;

/// Boundary for the external tools the orchestrator drives (composer, php,
/// bun, valet). Implementations wait synchronously for each command; there
/// is no timeout handling, so a hung tool hangs the run.
pub trait ToolRunner {
    /// Run a mandatory command, surfacing the tool's own output to the user.
    /// A non-zero exit is fatal to the run.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError>;

    /// Run a tolerated command. On failure the error is reported to stderr
    /// and swallowed; the run continues.
    fn run_best_effort(&self, program: &str, args: &[&str], cwd: &Path);
}
