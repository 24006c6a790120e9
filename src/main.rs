//! Code Debug Helper - an AI tutor that finds, explains and fixes broken code
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use codefix_app::config::load_settings;
use codefix_core::logging;
use codefix_core::prelude::*;
use codefix_gemini::{GeminiClient, GeminiConfig};

/// Code Debug Helper - paste broken code, learn what's wrong
#[derive(Parser, Debug)]
#[command(name = "codefix")]
#[command(about = "An AI tutor that finds, explains and fixes errors in your code", long_about = None)]
struct Args {
    /// Source file, image or PDF to load on start
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gemini model to use instead of the configured one
    #[arg(long)]
    model: Option<String>,

    /// Analyze FILE and print JSON instead of starting the TUI
    #[arg(long, requires = "file")]
    headless: bool,

    /// With --headless, simulate running FILE and print its console output
    #[arg(long, requires = "headless")]
    run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let mut settings = load_settings(args.config.as_deref());
    if let Some(model) = args.model {
        settings.gemini.model = model;
    }
    info!(
        "Settings: model={}, base_url={}",
        settings.gemini.model, settings.gemini.base_url
    );

    let config = GeminiConfig::from_env(
        &settings.gemini.api_key_env,
        &settings.gemini.model,
        &settings.gemini.base_url,
    );
    let client = GeminiClient::new(config)?;

    let result = match (args.headless, args.file) {
        (true, Some(path)) => {
            let mut stdout = io::stdout().lock();
            headless::run_headless(&client, &path, args.run, &mut stdout).await
        }
        (_, file) => codefix_tui::run(settings, client, file).await,
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Code Debug Helper exiting");
    result
}
