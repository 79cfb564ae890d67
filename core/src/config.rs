use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "exam-questions";
pub const INDEX_FILE_NAME: &str = "index.json";
pub const MATCH_SUFFIX: &str = ".json";

/// Where to scan, what to select, and where the index document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub data_dir: PathBuf,
    /// Written inside `data_dir`; never listed in its own output.
    pub output_name: String,
    pub suffix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::for_dir(DEFAULT_DATA_DIR)
    }
}

impl IndexConfig {
    pub fn for_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            output_name: INDEX_FILE_NAME.to_string(),
            suffix: MATCH_SUFFIX.to_string(),
        }
    }

    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_name)
    }
}
