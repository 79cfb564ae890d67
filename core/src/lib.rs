pub mod config;
pub mod index;
pub mod report;

pub mod error;

pub use config::IndexConfig;
pub use error::{CoreError, CoreResult};
pub use index::builder::{build_index, IndexBuilder};
pub use report::IndexReport;
