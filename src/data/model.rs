use std::path::{Path, PathBuf};

/// Side length of a component image.
pub const GRID_SIDE: usize = 28;

/// Number of values in one component (28 x 28).
pub const GRID_LEN: usize = GRID_SIDE * GRID_SIDE;

/// Size of one stored value in bytes.
pub const VALUE_BYTES: usize = std::mem::size_of::<f32>();

// ---------------------------------------------------------------------------
// ComponentFile – one discovered file on disk
// ---------------------------------------------------------------------------

/// A file whose name matched the component pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComponentFile {
    path: PathBuf,
}

impl ComponentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used as the display title, e.g. `component_3.raw`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ---------------------------------------------------------------------------
// ComponentGrid – the 28x28 reshaped view
// ---------------------------------------------------------------------------

/// Row-major 28x28 grid: flat index `i` is cell `(i / 28, i % 28)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGrid {
    values: Vec<f32>,
}

impl ComponentGrid {
    /// Reshape a flat value sequence. Returns `None` unless it holds exactly
    /// [`GRID_LEN`] values.
    pub fn from_flat(values: Vec<f32>) -> Option<Self> {
        (values.len() == GRID_LEN).then_some(Self { values })
    }

    pub fn rows(&self) -> usize {
        GRID_SIDE
    }

    pub fn cols(&self) -> usize {
        GRID_SIDE
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        Some(self.values[row * GRID_SIDE + col])
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.values[row * GRID_SIDE..(row + 1) * GRID_SIDE]
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Minimum and maximum over the finite values, or `None` if there are none.
    pub fn range(&self) -> Option<(f32, f32)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
