use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use niri_keybinds::cli::{CliArgs, RunMode};
use niri_keybinds::config::AppConfig;
use niri_keybinds::{keybinds, sensors};

fn print_cheatsheet(config: &Path, pretty: bool) -> Result<()> {
    let sheet = keybinds::load_cheatsheet(config);
    tracing::info!(
        "Cheatsheet for {}: {} keybinds in {} categories",
        config.display(),
        sheet.keybind_count(),
        sheet.children.len()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&sheet)
    } else {
        serde_json::to_string(&sheet)
    }
    .context("Failed to serialize cheatsheet")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write cheatsheet")?;
    Ok(())
}

fn print_sensors(sysfs_root: &Path) -> Result<()> {
    let found = sensors::detect(sysfs_root);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", found).context("Failed to write sensor paths")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    niri_keybinds::tracing::init(args.verbose);

    let app = AppConfig::load();
    let mode = args.into_mode(&app).map_err(|e| anyhow!(e))?;
    tracing::debug!(?mode, "Starting");

    match mode {
        RunMode::Binds { config, pretty } => print_cheatsheet(&config, pretty),
        RunMode::Sensors { sysfs_root } => print_sensors(&sysfs_root),
    }
}
