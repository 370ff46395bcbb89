use anyhow::Context;
use clap::Parser;
use hyperlink_cli::args::Cli;
use hyperlink_cli::{run, settings};
use hyperlink_logger::Logger;
use std::io::Write;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = settings::resolve(&cli)?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(settings::log_level(&settings)?)
        .ansi(settings.log.ansi);
    if let Some(directory) = &settings.log.directory {
        logger = logger.file(directory.clone()).json(settings.log.json);
    }
    let _log = logger.init().context("Failed to initialize logging")?;

    let mut stdout = std::io::stdout().lock();
    let code = run(&cli, &settings, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::from(code))
}
