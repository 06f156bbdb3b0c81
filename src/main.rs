//! purchases - browse a purchase history in the terminal
//!
//! Binary entry point. Screen logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use purchases_app::config::{self, Settings};
use purchases_app::AppState;
use purchases_core::{logging, FilterState, StatusFilter};
use tracing::info;

/// Browse past orders: search, filter by status, expand line items
#[derive(Parser, Debug)]
#[command(name = "purchases")]
#[command(about = "A terminal purchase-history browser", long_about = None)]
struct Args {
    /// Settings file (defaults to <config_dir>/purchase-history/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Print the screen as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Initial status filter: all, settled, pending, cancelled (or the Spanish labels)
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    if args.init_config {
        return init_config(args.config);
    }

    let status = args
        .status
        .as_deref()
        .map(StatusFilter::from_str)
        .transpose()?
        .unwrap_or_default();
    let filter = FilterState::new(args.search.unwrap_or_default(), status);

    let settings: Settings = config::load_settings(args.config.as_deref());
    info!(
        "purchases starting (headless={}, icons={})",
        args.headless, settings.ui.icons
    );

    let state = AppState::with_settings(settings)?.with_filter(filter);

    if args.headless {
        headless::run(&state)?;
    } else {
        purchases_tui::run(state).await?;
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> color_eyre::Result<()> {
    let Some(path) = path.or_else(config::default_config_path) else {
        color_eyre::eyre::bail!("No config directory on this platform; pass --config PATH");
    };

    if config::init_config_file(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists, leaving it untouched", path.display());
    }
    Ok(())
}
