use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::data::model::ComponentGrid;

// ---------------------------------------------------------------------------
// Viridis gradient
// ---------------------------------------------------------------------------

/// Evenly spaced samples of the viridis colour map, dark to bright.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (0x44, 0x01, 0x54),
    (0x47, 0x2c, 0x7a),
    (0x3b, 0x51, 0x8b),
    (0x2c, 0x71, 0x8e),
    (0x21, 0x90, 0x8d),
    (0x27, 0xad, 0x81),
    (0x5c, 0xc8, 0x63),
    (0xaa, 0xdc, 0x32),
    (0xfd, 0xe7, 0x25),
];

/// Colour used for NaN cells.
pub const NAN_COLOR: [u8; 3] = [160, 160, 160];

/// Sample the gradient at `t` in `[0, 1]` (clamped).
pub fn viridis(t: f32) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lower as f32;

    let a = to_linear(VIRIDIS[lower]);
    let b = to_linear(VIRIDIS[lower + 1]);
    let mixed: Srgb = Srgb::from_linear(a.mix(b, frac));
    let rgb: Srgb<u8> = mixed.into_format();
    [rgb.red, rgb.green, rgb.blue]
}

fn to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

// ---------------------------------------------------------------------------
// Value → colour mapping for one grid
// ---------------------------------------------------------------------------

/// Linear normalisation of grid values onto the viridis gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    pub lo: f32,
    pub hi: f32,
}

impl ColorMap {
    /// Scale to the grid's finite range; a grid without finite values gets
    /// the unit range.
    pub fn for_grid(grid: &ComponentGrid) -> Self {
        let (lo, hi) = grid.range().unwrap_or((0.0, 1.0));
        ColorMap { lo, hi }
    }

    /// Position of `value` in `[0, 1]`. A flat range maps everything to 0.
    ///
    /// Computed in `f64` so neither tiny nor near-`f32::MAX` ranges collapse.
    pub fn normalize(&self, value: f32) -> f32 {
        let lo = f64::from(self.lo);
        let span = f64::from(self.hi) - lo;
        if !(span > 0.0 && span.is_finite()) {
            return 0.0;
        }
        ((f64::from(value) - lo) / span).clamp(0.0, 1.0) as f32
    }

    pub fn rgb(&self, value: f32) -> [u8; 3] {
        if value.is_nan() {
            return NAN_COLOR;
        }
        viridis(self.normalize(value))
    }

    pub fn color_for(&self, value: f32) -> Color32 {
        let [r, g, b] = self.rgb(value);
        Color32::from_rgb(r, g, b)
    }

    /// Packed RGB bytes for the whole grid, row-major.
    pub fn rgb_buffer(&self, grid: &ComponentGrid) -> Vec<u8> {
        grid.values().iter().flat_map(|&v| self.rgb(v)).collect()
    }
}
