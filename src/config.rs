//! Stack configuration resolution.
//!
//! Builds a [`StackConfig`] once per run from (in order of precedence)
//! explicit overrides, a prior stack env file, and computed defaults. No
//! downstream component reads the ambient process environment; everything
//! flows through the record produced here.

use std::fs;
use std::path::Path;

use crate::envfile;
use crate::error::AppError;

/// Stack-level env file read at the stack root.
pub const STACK_ENV_FILE: &str = ".stackup.env";

/// Recognized key for the base domain.
pub const DOMAIN_KEY: &str = "DEV_DOMAIN";

/// Recognized key for the frontend port.
pub const PORT_KEY: &str = "FRONTEND_PORT";

/// Default frontend port when neither override nor env file supplies one.
pub const DEFAULT_FRONTEND_PORT: u16 = 3000;

/// Explicit override values collected at the CLI boundary.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub domain: Option<String>,
    pub port: Option<String>,
}

/// Resolved configuration for one run. Built once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Bare domain name without the `.test` suffix, e.g. `acme`.
    pub base_domain: String,
    /// Port the frontend dev server listens on.
    pub frontend_port: u16,
}

/// Resolve the stack configuration.
///
/// Precedence per value: override, then env file, then default. The default
/// domain is the stack root's directory name; the default port is 3000.
pub fn resolve(
    stack_root: &Path,
    env_path: &Path,
    overrides: &Overrides,
) -> Result<StackConfig, AppError> {
    let file_content = if env_path.exists() { Some(fs::read_to_string(env_path)?) } else { None };

    let base_domain = match &overrides.domain {
        Some(domain) => domain.clone(),
        None => match file_content.as_deref().and_then(|c| envfile::lookup(c, DOMAIN_KEY)) {
            Some(domain) => domain.to_string(),
            None => default_domain(stack_root)?,
        },
    };

    if base_domain.is_empty() {
        return Err(AppError::config_error("Base domain must not be empty"));
    }

    let frontend_port = match &overrides.port {
        Some(port) => parse_port(port)?,
        None => match file_content.as_deref().and_then(|c| envfile::lookup(c, PORT_KEY)) {
            Some(port) => parse_port(port)?,
            None => DEFAULT_FRONTEND_PORT,
        },
    };

    Ok(StackConfig { base_domain, frontend_port })
}

fn default_domain(stack_root: &Path) -> Result<String, AppError> {
    stack_root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Cannot derive a domain from '{}'; pass --domain or set {} in {}",
                stack_root.display(),
                DOMAIN_KEY,
                STACK_ENV_FILE
            ))
        })
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(AppError::config_error(format!(
            "Invalid frontend port '{}': must be a positive integer",
            value
        ))),
    }
}
