//! The two managed services and their existence gate.

use std::path::{Path, PathBuf};

/// A scaffolded project within the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Backend,
    Frontend,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Backend, Service::Frontend];

    /// Directory name under the stack root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Service::Backend => "backend",
            Service::Frontend => "frontend",
        }
    }

    /// Absolute path to the service directory.
    pub fn dir(self, stack_root: &Path) -> PathBuf {
        stack_root.join(self.dir_name())
    }

    /// Absolute path to the service's rendered env file.
    pub fn env_path(self, stack_root: &Path) -> PathBuf {
        match self {
            Service::Backend => self.dir(stack_root).join(".env"),
            Service::Frontend => self.dir(stack_root).join(".env.local"),
        }
    }

    /// Hostname registered with the local HTTPS proxy (without `.test`).
    pub fn proxy_host(self, base_domain: &str) -> String {
        match self {
            Service::Backend => format!("api.{base_domain}"),
            Service::Frontend => base_domain.to_string(),
        }
    }
}

/// Scaffolding decision for one service, probed fresh at the start of each
/// run and never cached across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Directory is absent; the full scaffold path applies.
    NeedsScaffold,
    /// Directory already exists; only configuration steps apply.
    ExistsAlready,
}

impl ServiceState {
    /// Query the filesystem for the service directory. Pure query, no side
    /// effects; an existing directory is not an error, it just downgrades
    /// that service to configuration-only.
    pub fn probe(stack_root: &Path, service: Service) -> Self {
        if service.dir(stack_root).is_dir() {
            ServiceState::ExistsAlready
        } else {
            ServiceState::NeedsScaffold
        }
    }
}
