use clap::Parser;
use stackup::{Overrides, SetupOptions};

#[derive(Parser)]
#[command(name = "stackup")]
#[command(version)]
#[command(
    about = "Bootstrap a backend + frontend local development stack",
    long_about = None
)]
struct Cli {
    /// Re-apply env files and proxy links without re-scaffolding
    #[arg(short = 'c', long)]
    config_only: bool,
    /// Base domain (defaults to DEV_DOMAIN from .stackup.env, then the stack directory name)
    #[arg(long)]
    domain: Option<String>,
    /// Frontend port (defaults to FRONTEND_PORT from .stackup.env, then 3000)
    #[arg(long)]
    port: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let options = SetupOptions {
        config_only: cli.config_only,
        overrides: Overrides { domain: cli.domain, port: cli.port },
    };

    if let Err(e) = stackup::setup(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
