//! Hornero CLI Binary
//!
//! Bootstraps configuration and translations. The terminal UI itself lives
//! elsewhere; this binary inspects what it would start with.

use anyhow::Context;
use clap::Parser;
use hornero::app::App;
use hornero::config::{default_config, AppConfig, BuildInfo};
use hornero::logging::{init_logging, LoggingConfig};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hornero", about = "A simple terminal UI for docker")]
struct Cli {
    /// Enable debug logging to the config directory
    #[arg(short, long)]
    debug: bool,

    /// Print the default config and exit
    #[arg(short, long)]
    config: bool,

    /// Print the merged config (defaults plus config.yml) and exit
    #[arg(long)]
    print_config: bool,

    /// Print the path of config.yml and exit
    #[arg(long)]
    config_file: bool,

    /// Project directory
    #[arg(short, long, default_value = ".")]
    project_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Most failures happen before logging is installed, so report on stderr.
    if let Err(e) = run(&cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.config {
        print!("{}", serde_yaml::to_string(&default_config())?);
        return Ok(());
    }

    let build = BuildInfo::from_env().context("reading build metadata")?;
    let app_config = AppConfig::new(build, cli.debug, &cli.project_dir)?;

    if cli.config_file {
        println!("{}", app_config.config_filename().display());
        return Ok(());
    }
    if cli.print_config {
        print!("{}", serde_yaml::to_string(&app_config.user_config)?);
        return Ok(());
    }

    init_logging(&LoggingConfig::for_app(&app_config)).context("initializing logging")?;
    info!(
        version = %app_config.version,
        commit = %app_config.commit,
        config_dir = %app_config.config_dir.display(),
        "hornero starting"
    );

    let app = App::new(app_config);
    println!("config: {}", app.config.config_filename().display());
    println!("language: {}", app.language);
    Ok(())
}
