//! CLI Adapter.

mod install;
mod platform;
mod render;
mod vhost_args;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;
use vhost_args::VHostArgs;

#[derive(Parser)]
#[command(name = "vhostgen")]
#[command(version)]
#[command(about = "Generate and install Apache virtual host configuration", long_about = None)]
struct Cli {
    /// Settings file (default: $VHOSTGEN_CONFIG, then /etc/vhostgen/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log resolved values and executed commands to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the virtual host configuration without installing it
    #[clap(visible_alias = "r")]
    Render {
        #[command(flatten)]
        vhost: VHostArgs,
    },
    /// Write the virtual host into the Apache configuration directory
    #[clap(visible_alias = "i")]
    Install {
        #[command(flatten)]
        vhost: VHostArgs,
        /// Directory receiving <server-name>.conf (default: derived from the Apache root)
        #[arg(long, value_name = "DIR")]
        vhost_dir: Option<PathBuf>,
        /// Overwrite an existing virtual host file
        #[arg(short = 'f', long)]
        force: bool,
        /// Enable the site and gracefully reload Apache after installation
        #[arg(short = 'r', long)]
        reload: bool,
    },
    /// Show detected OS family, distribution and Apache facts
    Platform {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings_path = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Render { vhost } => render::run_render(vhost, settings_path),
        Commands::Install { vhost, vhost_dir, force, reload } => {
            install::run_install(vhost, vhost_dir, force, reload, settings_path)
        }
        Commands::Platform { json } => platform::run_platform(json, settings_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
