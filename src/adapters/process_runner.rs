use std::path::Path;
use std::process::Command;

use crate::error::AppError;
use crate::ports::ToolRunner;

/// Runs external tools as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        // Stdio is inherited so the tool's own narration reaches the user.
        let status = Command::new(program).args(args).current_dir(cwd).status().map_err(|e| {
            AppError::ExternalToolError {
                tool: program.to_string(),
                error: format!("Failed to execute '{} {}': {}", program, args.join(" "), e),
            }
        })?;

        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: program.to_string(),
                error: format!("'{} {}' exited with {}", program, args.join(" "), status),
            });
        }

        Ok(())
    }

    fn run_best_effort(&self, program: &str, args: &[&str], cwd: &Path) {
        let outcome = Command::new(program).args(args).current_dir(cwd).output();

        match outcome {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let details = if stderr.is_empty() { output.status.to_string() } else { stderr };
                eprintln!("warning: '{} {}' failed ({}); continuing", program, args.join(" "), details);
            }
            Err(e) => {
                eprintln!("warning: failed to execute '{} {}': {}; continuing", program, args.join(" "), e);
            }
        }
    }
}
