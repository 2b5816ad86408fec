use std::sync::Arc;

use eframe::egui::{self, TextureHandle, Ui};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::state::{cell_at, ViewState};

// ---------------------------------------------------------------------------
// Component image plot (central panel)
// ---------------------------------------------------------------------------

/// Render the grid as an image spanning `[0, 28]` on both axes, row 0 at
/// the top like an image viewer.
pub fn component_plot(ui: &mut Ui, state: &ViewState, texture: &TextureHandle) {
    let side = state.grid.rows() as f64;
    let grid = Arc::clone(&state.grid);

    Plot::new("component_plot")
        .data_aspect(1.0)
        .show_grid(false)
        .x_axis_label("column")
        .y_axis_label("row")
        .y_axis_formatter(move |mark, _range| {
            let row = side - mark.value;
            if (0.0..=side).contains(&row) {
                format!("{row:.0}")
            } else {
                String::new()
            }
        })
        .label_formatter(move |_name, point| match cell_at(&grid, point.x, point.y) {
            Some((row, col, value)) => format!("({row}, {col}) = {value:.4}"),
            None => String::new(),
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let image = PlotImage::new(
                texture,
                PlotPoint::new(side / 2.0, side / 2.0),
                egui::vec2(side as f32, side as f32),
            )
            .name(&state.title);
            plot_ui.image(image);
        });
}
