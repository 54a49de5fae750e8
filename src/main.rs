use clap::Parser;
use env_logger::Env;
use log::error;
use std::io;

use gallery_labels::cli::{commands::handle_cli, Cli};
use gallery_labels::config::{Config, DisplayZone};

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let zone = if cli.utc { DisplayZone::Utc } else { config.display_zone };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_cli(cli.command, zone, &mut out)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
