// Image directory listing — which screenshots were actually downloaded.
//
// Only names are read. Images are never opened or decoded here.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::IngestError;

/// List every entry name in `dir` (non-recursive).
///
/// Names that are not valid UTF-8 can never equal a URL-derived filename,
/// so they are skipped with a warning.
pub fn list_image_files(dir: &Path) -> Result<HashSet<String>, IngestError> {
    const KIND: &str = "image directory";

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::from_io(KIND, dir, e))?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::from_io(KIND, dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) => {
                names.insert(name);
            }
            Err(raw) => {
                warn!(name = ?raw, "Skipping non UTF-8 file name");
            }
        }
    }

    info!(path = %dir.display(), count = names.len(), "Listed image files");
    Ok(names)
}
