use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use super::model::ComponentFile;
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// File-name pattern: a single `*` wildcard between a prefix and a suffix
// ---------------------------------------------------------------------------

/// The fixed pattern component files are discovered by.
pub const COMPONENT_PATTERN: NamePattern = NamePattern {
    prefix: "component_",
    suffix: ".raw",
};

/// A glob of the form `<prefix>*<suffix>`; `*` matches any run of bytes,
/// including an empty one. Names need not be valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl NamePattern {
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        name.len() >= self.prefix.len() + self.suffix.len()
            && name.starts_with(self.prefix.as_bytes())
            && name.ends_with(self.suffix.as_bytes())
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

// ---------------------------------------------------------------------------
// Directory scan
// ---------------------------------------------------------------------------

/// List the component files directly inside `dir` (non-recursive).
///
/// Directories and dangling symlinks are skipped. Entries whose metadata
/// cannot be read for any other reason are kept so that `load` reports the
/// failure. The result is sorted by file name so the display order does not
/// depend on the filesystem's enumeration order.
pub fn discover(dir: &Path) -> Result<Vec<ComponentFile>, ViewerError> {
    let discovery_err = |source| ViewerError::Discovery {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        if !COMPONENT_PATTERN.matches(&entry.file_name()) {
            continue;
        }
        let path = entry.path();
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                debug!("Skipping {}: not a regular file", path.display());
                continue;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Skipping {}: dangling link", path.display());
                continue;
            }
            Err(e) => debug!("Cannot stat {}: {e}", path.display()),
        }
        files.push(ComponentFile::new(path));
    }

    files.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
    debug!(
        "Found {} files matching {COMPONENT_PATTERN} in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}
