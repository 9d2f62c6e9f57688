//! Setup command: orchestrates scaffolding, env rendering, and proxy links.
//!
//! Runs strictly sequentially: `Init → ResolveConfig → {FullSetup |
//! ConfigOnly} → Done`. Every external command is waited on synchronously.
//! Mandatory failures abort immediately with no rollback of files already
//! written; best-effort steps report and continue.

use std::fs;
use std::path::Path;

use crate::config::{self, Overrides, StackConfig};
use crate::error::AppError;
use crate::ports::ToolRunner;
use crate::secret;
use crate::service::{Service, ServiceState};
use crate::template::{self, EnvTemplate, TemplateContext};

/// Local path of the backend SSO client package, relative to the backend
/// directory.
const SSO_CLIENT_PATH: &str = "../packages/sso-client";

/// Composer package name of the SSO client.
const SSO_CLIENT_PACKAGE: &str = "stack/sso-client";

/// Local frontend packages added after scaffolding.
const FRONTEND_PACKAGES: [&str; 2] = [
    "@stack/sso-client@file:../packages/sso-client-js",
    "@stack/ui@file:../packages/ui",
];

/// Options for the setup command.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Re-apply configuration and proxy links without re-scaffolding.
    pub config_only: bool,
    /// Explicit domain/port overrides from the CLI.
    pub overrides: Overrides,
}

/// Execute the setup command against a stack root.
pub fn execute(
    stack_root: &Path,
    runner: &dyn ToolRunner,
    options: &SetupOptions,
) -> Result<(), AppError> {
    let config = config::resolve(
        stack_root,
        &stack_root.join(config::STACK_ENV_FILE),
        &options.overrides,
    )?;

    // Fail on a bad template before any external command runs.
    template::validate_all()?;

    println!(
        "➜ Stack '{}': https://{}.test (frontend port {})",
        config.base_domain, config.base_domain, config.frontend_port
    );

    if options.config_only {
        config_only(stack_root, &config)?;
    } else {
        full_setup(stack_root, runner, &config)?;
    }

    link_proxies(stack_root, runner, &config)?;

    Ok(())
}

fn full_setup(
    stack_root: &Path,
    runner: &dyn ToolRunner,
    config: &StackConfig,
) -> Result<(), AppError> {
    println!("➜ Installing shared dependencies");
    runner.run("composer", &["install"], stack_root)?;

    setup_backend(stack_root, runner, config)?;
    setup_frontend(stack_root, runner, config)?;

    Ok(())
}

fn config_only(stack_root: &Path, config: &StackConfig) -> Result<(), AppError> {
    render_env(stack_root, Service::Backend, config)?;
    render_env(stack_root, Service::Frontend, config)?;
    Ok(())
}

fn setup_backend(
    stack_root: &Path,
    runner: &dyn ToolRunner,
    config: &StackConfig,
) -> Result<(), AppError> {
    let backend_dir = Service::Backend.dir(stack_root);

    match ServiceState::probe(stack_root, Service::Backend) {
        ServiceState::NeedsScaffold => {
            println!("➜ Scaffolding backend");
            runner.run(
                "composer",
                &["create-project", "laravel/laravel", Service::Backend.dir_name()],
                stack_root,
            )?;
            runner.run(
                "composer",
                &["config", "repositories.sso-client", "path", SSO_CLIENT_PATH],
                &backend_dir,
            )?;
            runner.run(
                "composer",
                &["require", SSO_CLIENT_PACKAGE, "laravel/sanctum"],
                &backend_dir,
            )?;
        }
        ServiceState::ExistsAlready => {
            println!("➜ Backend exists, skipping scaffold");
        }
    }

    let preserved = render_env(stack_root, Service::Backend, config)?;

    if preserved.is_none() {
        println!("➜ Generating backend application key");
        runner.run("php", &["artisan", "key:generate"], &backend_dir)?;
    }

    // Publishing the SSO package config is tolerated to fail (e.g. the
    // package ships no publishable tag yet).
    runner.run_best_effort("php", &["artisan", "vendor:publish", "--tag=sso-config"], &backend_dir);

    Ok(())
}

fn setup_frontend(
    stack_root: &Path,
    runner: &dyn ToolRunner,
    config: &StackConfig,
) -> Result<(), AppError> {
    let frontend_dir = Service::Frontend.dir(stack_root);

    match ServiceState::probe(stack_root, Service::Frontend) {
        ServiceState::NeedsScaffold => {
            println!("➜ Scaffolding frontend");
            runner.run(
                "bunx",
                &[
                    "create-next-app@latest",
                    Service::Frontend.dir_name(),
                    "--typescript",
                    "--tailwind",
                    "--eslint",
                    "--app",
                    "--src-dir",
                    "--import-alias",
                    "@/*",
                    "--turbopack",
                    "--use-bun",
                ],
                stack_root,
            )?;

            let mut add_args = vec!["add"];
            add_args.extend(FRONTEND_PACKAGES);
            runner.run("bun", &add_args, &frontend_dir)?;
        }
        ServiceState::ExistsAlready => {
            println!("➜ Frontend exists, skipping scaffold");
        }
    }

    render_env(stack_root, Service::Frontend, config)?;

    Ok(())
}

/// Render and write one service env file, preserving the backend application
/// key when one already exists. Returns the preserved key, if any.
fn render_env(
    stack_root: &Path,
    service: Service,
    config: &StackConfig,
) -> Result<Option<String>, AppError> {
    let env_path = service.env_path(stack_root);

    let preserved = match service {
        Service::Backend => secret::preserved_app_key(&env_path)?,
        Service::Frontend => None,
    };

    let ctx = TemplateContext::new(config, preserved.clone());
    let rendered = render_for(service, &ctx)?;

    write_file(&env_path, &rendered)?;
    println!("✅ Wrote {}", display_relative(stack_root, &env_path));

    Ok(preserved)
}

fn render_for(service: Service, ctx: &TemplateContext) -> Result<String, AppError> {
    let env_template = match service {
        Service::Backend => EnvTemplate::Backend,
        Service::Frontend => EnvTemplate::Frontend,
    };
    template::render(env_template, ctx)
}

fn link_proxies(
    stack_root: &Path,
    runner: &dyn ToolRunner,
    config: &StackConfig,
) -> Result<(), AppError> {
    for service in Service::ALL {
        let host = service.proxy_host(&config.base_domain);
        println!("➜ Linking https://{}.test", host);
        runner.run("valet", &["link", &host, "--secure"], &service.dir(stack_root))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn display_relative(stack_root: &Path, path: &Path) -> String {
    path.strip_prefix(stack_root).unwrap_or(path).display().to_string()
}
