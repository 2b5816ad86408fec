use eframe::egui::{self, Align, Layout, RichText, Sense, Ui};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with run position and the "Next" button.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(&state.title).strong());
        ui.separator();
        ui.label(state.status_line());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            let label = if state.position < state.total {
                "Next ▶"
            } else {
                "Close"
            };
            if ui
                .button(label)
                .on_hover_text("Esc / Enter / Space")
                .clicked()
            {
                state.dismiss();
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Colour bar
// ---------------------------------------------------------------------------

const BAR_STEPS: usize = 64;

/// Vertical gradient from the grid's maximum (top) to its minimum (bottom).
pub fn colorbar(ui: &mut Ui, state: &ViewState) {
    let cm = &state.color_map;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(format!("{:.3}", cm.hi));

        let height = (ui.available_height() - 24.0).max(40.0);
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(24.0, height), Sense::hover());
        let painter = ui.painter();
        let step = rect.height() / BAR_STEPS as f32;
        for i in 0..BAR_STEPS {
            // top of the bar is the high end
            let t = 1.0 - (i as f64 + 0.5) / BAR_STEPS as f64;
            let (lo, hi) = (f64::from(cm.lo), f64::from(cm.hi));
            let value = (lo + t * (hi - lo)) as f32;
            let slice = egui::Rect::from_min_size(
                egui::pos2(rect.left(), rect.top() + i as f32 * step),
                egui::vec2(rect.width(), step + 0.5),
            );
            painter.rect_filled(slice, 0.0, cm.color_for(value));
        }

        ui.label(format!("{:.3}", cm.lo));
    });
}
