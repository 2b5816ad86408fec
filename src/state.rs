use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::model::ComponentGrid;

// ---------------------------------------------------------------------------
// Per-window state
// ---------------------------------------------------------------------------

/// Everything one viewer window shows, independent of rendering.
pub struct ViewState {
    /// Source file name, shown as the window and plot title.
    pub title: String,

    /// Shared with the plot's hover formatter, which is rebuilt every frame.
    pub grid: Arc<ComponentGrid>,

    /// Value → colour scaling for this grid.
    pub color_map: ColorMap,

    /// 1-based position of this component in the run.
    pub position: usize,
    pub total: usize,

    /// Set once the user asked to move on; the window closes next frame.
    pub dismissed: bool,
}

impl ViewState {
    pub fn new(grid: ComponentGrid, title: &str, position: usize, total: usize) -> Self {
        let color_map = ColorMap::for_grid(&grid);
        Self {
            title: title.to_string(),
            grid: Arc::new(grid),
            color_map,
            position,
            total,
            dismissed: false,
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Short status line, e.g. `2 / 5   min -0.31   max 0.87`.
    pub fn status_line(&self) -> String {
        format!(
            "{} / {}   min {:.4}   max {:.4}",
            self.position, self.total, self.color_map.lo, self.color_map.hi
        )
    }
}

/// Cell under a plot coordinate as `(row, col, value)`. The image spans
/// `[0, 28]` on both axes with row 0 at the top.
pub fn cell_at(grid: &ComponentGrid, x: f64, y: f64) -> Option<(usize, usize, f32)> {
    let rows = grid.rows() as f64;
    let cols = grid.cols() as f64;
    if !(0.0..cols).contains(&x) || !(0.0..rows).contains(&y) {
        return None;
    }
    let col = x.floor() as usize;
    let row = (rows - y).floor() as usize;
    grid.get(row, col).map(|v| (row, col, v))
}
