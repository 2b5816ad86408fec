use std::path::{Path, PathBuf};

use eframe::egui;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::info;

use crate::app::ComponentViewerApp;
use crate::color::ColorMap;
use crate::data::model::{ComponentGrid, GRID_SIDE};
use crate::error::ViewerError;
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Presenter: the display step of a run
// ---------------------------------------------------------------------------

/// Shows one grid at a time. `present` returns once the grid has been
/// dismissed (or written out, for headless presenters).
pub trait Presenter {
    /// Called before `present` with the 1-based position in the run.
    fn begin(&mut self, _position: usize, _total: usize) {}

    fn present(&mut self, grid: ComponentGrid, title: &str) -> Result<(), ViewerError>;
}

// ---------------------------------------------------------------------------
// Native window, blocking until the user closes it
// ---------------------------------------------------------------------------

pub struct WindowPresenter {
    position: usize,
    total: usize,
}

impl Default for WindowPresenter {
    fn default() -> Self {
        Self {
            position: 1,
            total: 1,
        }
    }
}

impl Presenter for WindowPresenter {
    fn begin(&mut self, position: usize, total: usize) {
        self.position = position;
        self.total = total;
    }

    fn present(&mut self, grid: ComponentGrid, title: &str) -> Result<(), ViewerError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([720.0, 600.0])
                .with_min_inner_size([360.0, 300.0]),
            run_and_return: true,
            ..Default::default()
        };

        let state = ViewState::new(grid, title, self.position, self.total);
        eframe::run_native(
            title,
            options,
            Box::new(move |cc| Ok(Box::new(ComponentViewerApp::new(cc, state)))),
        )
        .map_err(|e| ViewerError::Display {
            title: title.to_string(),
            message: e.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Headless PNG export
// ---------------------------------------------------------------------------

/// Writes each grid to `<out_dir>/<stem>.png` instead of opening a window.
pub struct PngPresenter {
    out_dir: PathBuf,
    scale: u32,
}

impl PngPresenter {
    pub fn new(out_dir: impl Into<PathBuf>, scale: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            scale: scale.max(1),
        }
    }

    fn target_for(&self, title: &str) -> PathBuf {
        let stem = Path::new(title)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| title.to_string());
        self.out_dir.join(format!("{stem}.png"))
    }
}

/// Render a grid to an RGB image, each cell as a `scale`x`scale` block.
pub fn render_image(grid: &ComponentGrid, scale: u32) -> RgbImage {
    let side = GRID_SIDE as u32;
    let color_map = ColorMap::for_grid(grid);
    let small = RgbImage::from_fn(side, side, |x, y| {
        Rgb(color_map.rgb(grid.row(y as usize)[x as usize]))
    });
    imageops::resize(&small, side * scale, side * scale, FilterType::Nearest)
}

impl Presenter for PngPresenter {
    fn present(&mut self, grid: ComponentGrid, title: &str) -> Result<(), ViewerError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|source| ViewerError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        let path = self.target_for(title);
        render_image(&grid, self.scale)
            .save(&path)
            .map_err(|source| ViewerError::Export {
                path: path.clone(),
                source,
            })?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
