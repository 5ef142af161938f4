//! Delimited-table ingestion: row estimation and record parsing.

pub mod error;
pub mod estimate;
pub mod progress;
pub mod reader;

pub use error::{IngestError, Result};
pub use estimate::estimate_data_rows;
pub use progress::{NoProgress, RowProgress};
pub use reader::{Record, RecordBatch, read_records};
