//! Roster CLI Application
//!
//! Interactive menu for managing employee records.

mod args;
mod console;
mod logging;
mod renderer;

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use console::{LineSource, TerminalConsole};
use log::info;
use renderer::TerminalRenderer;
use roster_core::{open_database, ConfigBuilder, LogSink, Session};
use rustyline::DefaultEditor;

fn main() -> Result<ExitCode> {
    let Args {
        database_file,
        log_file,
        page_size,
        config,
        no_color,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_file(config)
        .with_database_path(database_file)
        .with_log_file(log_file)
        .with_page_size(page_size)
        .build()
        .context("Failed to load configuration")?;

    logging::init(&config.log_file)?;

    let mut sink = LogSink;
    let Ok(db) = open_database(&config.database_path, &mut sink) else {
        eprintln!("Failed to connect to the database.");
        log::logger().flush();
        return Ok(ExitCode::FAILURE);
    };

    info!("Roster started with page size {}", config.page_size);

    let input = if io::stdin().is_terminal() {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        LineSource::Editor(Box::new(editor))
    } else {
        LineSource::Reader(io::stdin().lock())
    };

    let console = TerminalConsole::new(
        input,
        io::stdout(),
        TerminalRenderer::new(!no_color),
    );
    let outcome = Session::new(db, console, sink, config.page_size).run();
    log::logger().flush();

    outcome.context("Interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}
