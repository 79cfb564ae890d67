use crate::config::IndexConfig;
use crate::error::{CoreError, CoreResult};
use tracing::{debug, warn};
use walkdir::WalkDir;

// Entry selection for the index document:
// - direct children of data_dir only, no recursion
// - name ends with the suffix (case-sensitive)
// - reserved output name excluded
// - regular files only (symlinks resolved)
// - sorted by byte order, never by enumeration order
pub fn scan_entries(cfg: &IndexConfig) -> CoreResult<Vec<String>> {
    let root = cfg.data_dir.as_path();
    let mut names: Vec<String> = Vec::new();

    for e in WalkDir::new(root).min_depth(1).max_depth(1) {
        let e =
            e.map_err(|err| CoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
        let Some(name) = e.file_name().to_str() else {
            warn!(path = %e.path().display(), "skipping entry with non UTF-8 name");
            continue;
        };
        if !name.ends_with(cfg.suffix.as_str()) {
            debug!(name, "suffix mismatch");
            continue;
        }
        if name == cfg.output_name {
            debug!(name, "reserved output name");
            continue;
        }
        if !e.path().is_file() {
            debug!(name, "not a regular file");
            continue;
        }
        names.push(name.to_string());
    }

    names.sort();
    Ok(names)
}
