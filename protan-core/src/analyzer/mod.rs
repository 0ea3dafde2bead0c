pub mod registry;
pub mod report;
pub mod runner;
pub mod shape;

pub use registry::{Operation, OperationRegistry, Output};
pub use report::Report;
pub use runner::{BatchOutcome, BatchRunner};
pub use shape::OneOrMany;

use crate::error::BioResult;
use crate::seq::validate::{Abbreviation, RawSeq};

/// Runs one of the standard operations over `seqs` and prints the summary.
///
/// Single results and single corrupted entries are unwrapped, see [`OneOrMany`].
pub fn run_protein_analyzer_tool<S>(
    seqs: &[S],
    operation: &str,
    abbreviation: Abbreviation,
) -> BioResult<(OneOrMany<Output>, OneOrMany<(usize, RawSeq)>)>
where
    S: AsRef<str> + Sync,
{
    let outcome = BatchRunner::new()
        .abbreviation(abbreviation)
        .run(seqs, operation)?;
    Ok(outcome.into_collapsed())
}

#[cfg(test)]
mod tests;
