//! Env-file rendering from embedded templates.
//!
//! Templates draw from a closed set of placeholders ([`Placeholder`]), each
//! backed by a field of [`TemplateContext`]. A template referencing anything
//! outside that set fails validation before any render happens, and the
//! engine runs with strict undefined behavior so an unresolved placeholder
//! fails the render instead of leaking into the output.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::config::StackConfig;
use crate::error::AppError;

/// The rendered environment file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvTemplate {
    /// Backend `.env` (Laravel-style).
    Backend,
    /// Frontend `.env.local` (Next.js-style).
    Frontend,
}

impl EnvTemplate {
    pub const ALL: [EnvTemplate; 2] = [EnvTemplate::Backend, EnvTemplate::Frontend];

    fn name(self) -> &'static str {
        match self {
            EnvTemplate::Backend => "backend.env",
            EnvTemplate::Frontend => "frontend.env",
        }
    }

    fn source(self) -> &'static str {
        match self {
            EnvTemplate::Backend => include_str!("templates/backend.env"),
            EnvTemplate::Frontend => include_str!("templates/frontend.env"),
        }
    }
}

/// The closed set of substitutable tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    BaseDomain,
    ApiUrl,
    FrontendUrl,
    FrontendPort,
    AppKey,
    StatefulDomains,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::BaseDomain,
        Placeholder::ApiUrl,
        Placeholder::FrontendUrl,
        Placeholder::FrontendPort,
        Placeholder::AppKey,
        Placeholder::StatefulDomains,
    ];

    /// Variable name as it appears inside templates.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::BaseDomain => "base_domain",
            Placeholder::ApiUrl => "api_url",
            Placeholder::FrontendUrl => "frontend_url",
            Placeholder::FrontendPort => "frontend_port",
            Placeholder::AppKey => "app_key",
            Placeholder::StatefulDomains => "stateful_domains",
        }
    }
}

/// Fully resolved values for one render. Field names mirror [`Placeholder`].
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    base_domain: String,
    api_url: String,
    frontend_url: String,
    frontend_port: u16,
    app_key: String,
    stateful_domains: String,
}

impl TemplateContext {
    /// Derive the render context from the resolved configuration plus an
    /// optional preserved application key. An absent key renders as an empty
    /// `APP_KEY=`, which triggers downstream key generation.
    pub fn new(config: &StackConfig, preserved_key: Option<String>) -> Self {
        let domain = &config.base_domain;
        Self {
            base_domain: domain.clone(),
            api_url: format!("https://api.{domain}.test"),
            frontend_url: format!("https://{domain}.test"),
            frontend_port: config.frontend_port,
            app_key: preserved_key.unwrap_or_default(),
            stateful_domains: format!("{domain}.test,api.{domain}.test"),
        }
    }
}

fn build_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    for template in EnvTemplate::ALL {
        env.add_template(template.name(), template.source()).map_err(|e| {
            AppError::TemplateError(format!(
                "Failed to register template '{}': {}",
                template.name(),
                e
            ))
        })?;
    }

    Ok(env)
}

/// Validate every embedded template against the declared placeholder set.
///
/// Run once at startup, before any external command, so a template edit that
/// introduces an unknown variable fails the whole run up front rather than
/// mid-setup.
pub fn validate_all() -> Result<(), AppError> {
    let env = build_environment()?;

    for template in EnvTemplate::ALL {
        let compiled = env.get_template(template.name()).map_err(|e| {
            AppError::TemplateError(format!(
                "Failed to load template '{}': {}",
                template.name(),
                e
            ))
        })?;

        for variable in compiled.undeclared_variables(true) {
            if !Placeholder::ALL.iter().any(|p| p.name() == variable) {
                return Err(AppError::TemplateError(format!(
                    "Template '{}' references unknown placeholder '{}'",
                    template.name(),
                    variable
                )));
            }
        }
    }

    Ok(())
}

/// Render one env template with the given context.
///
/// Pure function of its inputs: the same template and context always yield
/// byte-identical output.
pub fn render(template: EnvTemplate, ctx: &TemplateContext) -> Result<String, AppError> {
    let env = build_environment()?;

    let compiled = env.get_template(template.name()).map_err(|e| {
        AppError::TemplateError(format!("Failed to load template '{}': {}", template.name(), e))
    })?;

    compiled.render(ctx).map_err(|e| {
        AppError::TemplateError(format!("Failed to render template '{}': {}", template.name(), e))
    })
}
