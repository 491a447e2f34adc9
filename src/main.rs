use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use epad::cli::CliArgs;
use epad::config::EditorConfig;
use epad::model::AppModel;
use epad::runtime::{App, Flow};
use epad::shell;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(|e| anyhow!(e))?;

    epad::tracing::init();

    let config = EditorConfig::load();
    tracing::debug!(?config, "loaded configuration");

    let mut app = App::new(AppModel::new(config));
    if app.open_startup_files(startup.files) == Flow::Quit {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(&mut app, stdin.lock(), &mut stdout).context("shell I/O failed")?;

    Ok(())
}
