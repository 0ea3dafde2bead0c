use crate::analyzer::runner::BatchOutcome;
use std::fmt;

/// Human-readable summary of a batch, as printed after a run.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    outcome: &'a BatchOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a BatchOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.outcome.total();
        let corrupted = self.outcome.corrupted().len();
        if corrupted == 0 {
            return writeln!(f, "All {total} sequence(s) processed successfully");
        }

        writeln!(f, "Processing result: [{}]", self.outcome.markers())?;
        writeln!(f)?;
        writeln!(
            f,
            "{} sequence(s) out of {total} given have been processed successfully.",
            self.outcome.results().len()
        )?;
        writeln!(
            f,
            "{corrupted} has been recognized as corrupted, i.e. non-protein"
        )
    }
}
