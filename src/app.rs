use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::data::model::GRID_SIDE;
use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// One window showing one component grid.
pub struct ComponentViewerApp {
    pub state: ViewState,
    texture: TextureHandle,
}

impl ComponentViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: ViewState) -> Self {
        let pixels = state.color_map.rgb_buffer(&state.grid);
        let image = ColorImage::from_rgb([GRID_SIDE, GRID_SIDE], &pixels);
        // one texel per cell, no smoothing
        let texture = cc
            .egui_ctx
            .load_texture(state.title.clone(), image, TextureOptions::NEAREST);
        Self { state, texture }
    }
}

impl eframe::App for ComponentViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| {
            i.key_pressed(egui::Key::Escape)
                || i.key_pressed(egui::Key::Enter)
                || i.key_pressed(egui::Key::Space)
        }) {
            self.state.dismiss();
        }

        // ---- Top panel: title, position, "Next" ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: colour bar ----
        egui::SidePanel::right("colorbar_panel")
            .default_width(90.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::colorbar(ui, &self.state);
            });

        // ---- Central panel: image plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::component_plot(ui, &self.state, &self.texture);
        });

        if self.state.dismissed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
