//! Helpers shared by the unit tests.

use std::path::Path;

use crate::data::model::ComponentFile;

/// Encode values the way the training pipeline writes them (native endian).
pub fn encode(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Write a component file named `name` into `dir`.
pub fn write_component(dir: &Path, name: &str, values: &[f32]) -> ComponentFile {
    let path = dir.join(name);
    std::fs::write(&path, encode(values)).unwrap();
    ComponentFile::new(path)
}
