use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::{GRID_LEN, VALUE_BYTES};

// ---------------------------------------------------------------------------
// Error taxonomy for a viewer run
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The target directory could not be listed.
    #[error("cannot list directory {}", dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Byte length does not hold exactly one 28x28 grid of `f32`.
    #[error(
        "{}: expected {} f32 values ({} bytes), found {bytes} bytes ({})",
        path.display(),
        GRID_LEN,
        GRID_LEN * VALUE_BYTES,
        describe_count(*bytes)
    )]
    ShapeMismatch { path: PathBuf, bytes: usize },

    #[error("failed to display '{title}': {message}")]
    Display { title: String, message: String },

    #[error("failed to write image {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ViewerError {
    /// Load failures may be skipped under the keep-going policy; everything
    /// else always ends the run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, ViewerError::Io { .. } | ViewerError::ShapeMismatch { .. })
    }
}

fn describe_count(bytes: usize) -> String {
    let count = bytes / VALUE_BYTES;
    match bytes % VALUE_BYTES {
        0 => format!("{count} values"),
        rest => format!("{count} values plus {rest} stray bytes"),
    }
}
