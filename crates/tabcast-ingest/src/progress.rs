//! Progress reporting contract for row ingestion.
//!
//! Rendering is the caller's concern. The reader only emits one advance
//! signal per accepted row and a final completion signal; the indicator
//! is advisory and never affects parsing.

/// Sink for per-row progress signals.
pub trait RowProgress {
    /// Advance the indicator by one accepted row.
    fn advance(&self);

    /// Mark the scan as complete.
    fn finish(&self);
}

/// Progress sink that ignores all signals.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl RowProgress for NoProgress {
    fn advance(&self) {}

    fn finish(&self) {}
}
