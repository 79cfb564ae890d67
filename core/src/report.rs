use crate::error::CoreResult;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Outcome of one index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub output_path: PathBuf,
    pub entries: Vec<String>,
}

impl IndexReport {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!(
            "Generated {} with {} files:",
            self.output_path.display(),
            self.count()
        ));
        for name in &self.entries {
            lines.push(format!("  - {}", name));
        }
        lines
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// count is derived, so the report is serialized by hand rather than derived.
impl Serialize for IndexReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("IndexReport", 3)?;
        s.serialize_field("output_path", &self.output_path.to_string_lossy())?;
        s.serialize_field("count", &self.count())?;
        s.serialize_field("entries", &self.entries)?;
        s.end()
    }
}
