use std::path::Path;

use super::model::{ComponentFile, ComponentGrid, GRID_LEN, VALUE_BYTES};
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a component file and reshape it into a 28x28 grid.
///
/// The file is a headerless array of native-endian `f32` values and must
/// hold exactly 784 of them.
pub fn load(file: &ComponentFile) -> Result<ComponentGrid, ViewerError> {
    let path = file.path();
    let bytes = std::fs::read(path).map_err(|source| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    grid_from_bytes(path, &bytes)
}

/// Decode raw bytes into a grid; `path` is only used for error reporting.
pub fn grid_from_bytes(path: &Path, bytes: &[u8]) -> Result<ComponentGrid, ViewerError> {
    let mismatch = || ViewerError::ShapeMismatch {
        path: path.to_path_buf(),
        bytes: bytes.len(),
    };

    if bytes.len() != GRID_LEN * VALUE_BYTES {
        return Err(mismatch());
    }
    ComponentGrid::from_flat(decode_f32(bytes)).ok_or_else(mismatch)
}

/// Native-endian `f32` values; trailing bytes that do not form a full value
/// are dropped.
fn decode_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(VALUE_BYTES)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
