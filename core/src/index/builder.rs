use crate::config::IndexConfig;
use crate::error::{CoreError, CoreResult};
use crate::index::document::render_index_document;
use crate::index::scanner::scan_entries;
use crate::report::IndexReport;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct IndexBuilder;

impl IndexBuilder {
    pub fn build(cfg: &IndexConfig) -> CoreResult<IndexReport> {
        validate_config(cfg)?;
        if !cfg.data_dir.is_dir() {
            return Err(CoreError::DirectoryNotFound(cfg.data_dir.clone()));
        }

        info!(dir = %cfg.data_dir.display(), suffix = %cfg.suffix, "scanning data directory");
        let entries = scan_entries(cfg)?;

        // Overwrites in place; a concurrent run is last-writer-wins.
        let output_path = cfg.output_path();
        let bytes = render_index_document(&entries)?;
        fs::write(&output_path, bytes)?;
        info!(
            path = %output_path.display(),
            count = entries.len(),
            "wrote index document"
        );

        Ok(IndexReport {
            output_path,
            entries,
        })
    }
}

/// Builds `index.json` from the `*.json` files directly inside `data_dir`.
pub fn build_index(data_dir: impl AsRef<Path>) -> CoreResult<IndexReport> {
    IndexBuilder::build(&IndexConfig::for_dir(data_dir))
}

fn validate_config(cfg: &IndexConfig) -> CoreResult<()> {
    let name = cfg.output_name.as_str();
    let has_separator = name.contains(|c: char| c == '/' || c == '\\');
    if name.is_empty() || name == "." || name == ".." || has_separator {
        return Err(CoreError::InvalidInput(format!(
            "output name must be a plain file name, got {:?}",
            name
        )));
    }
    if cfg.suffix.is_empty() {
        return Err(CoreError::InvalidInput(
            "match suffix must not be empty".to_string(),
        ));
    }
    Ok(())
}
