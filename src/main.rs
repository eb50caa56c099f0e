use clap::Parser;
use multimaster::app::{App, Tui};
use multimaster::config::AppConfig;
use multimaster::{logging, Result};
use std::path::PathBuf;
use tracing::{error, info};

/// Learn and practice multiplication tables in the terminal
#[derive(Debug, Parser)]
#[command(name = "multimaster", version, about)]
struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed practice questions for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Screen to open first, e.g. /learn/7 or /practice
    #[arg(long)]
    route: Option<String>,

    /// Input polling interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Write the effective configuration, command line overrides included,
    /// to the config file and exit
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    /// Load the config file and apply command line overrides
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(route) = &self.route {
            config.start_route = route.clone();
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate_ms = tick_rate;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let log_path = logging::log_file_path()?;
    logging::init_file_logging(&log_path, &config.log_level)?;
    info!(?config, "Starting");

    let mut app = App::new(&config)?;
    let mut tui = Tui::new(config.tick_rate())?;
    tui.init()?;

    let outcome = app.run(&mut tui);
    tui.restore()?;
    if let Err(e) = &outcome {
        error!(error = %e, "Application error");
    }
    outcome
}
