//! Application key preservation across env re-renders.

use std::fs;
use std::path::Path;

use crate::envfile;
use crate::error::AppError;

/// Env-file key holding the backend application key.
pub const APP_KEY: &str = "APP_KEY";

/// Extract a previously generated application key from an existing env file.
///
/// Returns `None` when the file is missing, carries no `APP_KEY=` line, or
/// the key value is empty. An empty value must not count as preserved: it
/// would suppress the downstream key generation step and leave the backend
/// keyless. Read-only; never modifies the file.
pub fn preserved_app_key(env_path: &Path) -> Result<Option<String>, AppError> {
    if !env_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(env_path)?;
    Ok(envfile::lookup(&content, APP_KEY)
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string()))
}
