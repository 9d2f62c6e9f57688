//! stackup: bootstrap a backend + frontend local development stack.
//!
//! Scaffolds each service if its directory is absent, renders both env files
//! from embedded templates (preserving a previously generated backend
//! application key), and registers local HTTPS proxy links. A config-only
//! mode re-applies just the rendering and proxy steps.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod envfile;
mod error;
pub mod ports;
pub mod secret;
pub mod service;
pub mod template;

pub use commands::setup::SetupOptions;
pub use config::{Overrides, StackConfig};
pub use error::AppError;
pub use service::{Service, ServiceState};
pub use template::{EnvTemplate, Placeholder, TemplateContext};

use adapters::ProcessToolRunner;

/// Run setup against the current directory as the stack root.
pub fn setup(options: &SetupOptions) -> Result<(), AppError> {
    let stack_root = std::env::current_dir()?;
    let runner = ProcessToolRunner::new();

    commands::setup::execute(&stack_root, &runner, options)?;
    println!("✅ Stack ready");
    Ok(())
}
