//! nwish - show one document in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use nwish::app::config::RenderMode;
use nwish::core::prelude::*;

/// nwish - show one document in the terminal
#[derive(Parser, Debug)]
#[command(name = "nwish")]
#[command(about = "Show a document in a scrollable terminal screen", long_about = None)]
struct Args {
    /// Document to show (defaults to [document] path in the config file)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Config file (defaults to ~/.config/nwish/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Redraw the whole terminal after resizes and page switches
    #[arg(long)]
    high_performance: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    nwish::init()?;

    let mut settings = nwish::load_config(args.config)?;
    if args.high_performance {
        settings.ui.render_mode = RenderMode::HighPerformance;
    }

    // The document is read once, before the terminal is touched
    let document = match nwish::load_document(args.path, &settings) {
        Ok(document) => document,
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            eprintln!(
                "   Logs: {}",
                nwish::core::logging::log_directory().display()
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    nwish::run(document, settings).await
}
