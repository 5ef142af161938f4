//! Terminal progress rendering for row ingestion.

use indicatif::{ProgressBar, ProgressStyle};

use tabcast_ingest::RowProgress;

/// indicatif-backed progress bar sized from the row estimate.
///
/// The bar draws to stderr and is hidden automatically when stderr is
/// not a terminal, so piped runs stay clean.
pub struct IngestProgressBar {
    bar: ProgressBar,
}

impl IngestProgressBar {
    /// Create a bar expecting `total` rows.
    #[must_use]
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rows ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl RowProgress for IngestProgressBar {
    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
