mod app;
mod color;
mod data;
mod error;
mod present;
mod state;
mod ui;
mod viewer;

#[cfg(test)]
mod testutil;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use present::{PngPresenter, Presenter, WindowPresenter};
use viewer::ErrorPolicy;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Show every `component_*.raw` file (28x28 f32 images) one window at a time.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about)]
struct Cli {
    /// Directory to scan for component files.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Write PNG images into this directory instead of opening windows.
    #[arg(long, value_name = "OUT_DIR")]
    export: Option<PathBuf>,

    /// Pixel size of one grid cell in exported images.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Skip files that fail to load instead of stopping at the first one.
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let policy = if cli.keep_going {
        ErrorPolicy::KeepGoing
    } else {
        ErrorPolicy::FailFast
    };

    let mut presenter: Box<dyn Presenter> = match &cli.export {
        Some(out_dir) => Box::new(PngPresenter::new(out_dir, cli.scale)),
        None => Box::new(WindowPresenter::default()),
    };

    let shown = viewer::run(&cli.dir, presenter.as_mut(), policy)
        .with_context(|| format!("viewing components in {}", cli.dir.display()))?
        .into_result()?;
    log::debug!("{shown} components shown");
    Ok(())
}
