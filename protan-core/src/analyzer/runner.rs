use crate::analyzer::registry::{Operation, OperationRegistry, Output};
use crate::analyzer::report::Report;
use crate::analyzer::shape::OneOrMany;
use crate::error::BioResult;
use crate::seq::validate::{validate, Abbreviation, RawSeq, Verdict};
use log::{debug, info};

/// Validated, processed batch. Both lists follow input order.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOutcome {
    results: Vec<Output>,
    corrupted: Vec<(usize, RawSeq)>,
    total: usize,
}

impl BatchOutcome {
    pub fn results(&self) -> &[Output] {
        &self.results
    }

    /// `(input index, sequence)` for every rejected input.
    pub fn corrupted(&self) -> &[(usize, RawSeq)] {
        &self.corrupted
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// One `+` (processed) or `-` (corrupted) per input, in input order.
    pub fn markers(&self) -> String {
        let mut markers = vec!['+'; self.total];
        for &(idx, _) in &self.corrupted {
            markers[idx] = '-';
        }
        markers.into_iter().collect()
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }

    /// Return shape of the variadic entry point: single entries are unwrapped.
    pub fn into_collapsed(self) -> (OneOrMany<Output>, OneOrMany<(usize, RawSeq)>) {
        (
            OneOrMany::collapse(self.results),
            OneOrMany::collapse(self.corrupted),
        )
    }
}

enum Processed {
    Done(Output),
    Rejected(RawSeq),
}

fn process(seq: &str, mode: Abbreviation, op: Operation) -> BioResult<Processed> {
    Ok(match validate(seq, mode)? {
        Verdict::Valid(protein) => Processed::Done(op(&protein)),
        Verdict::Corrupted(raw) => Processed::Rejected(raw),
    })
}

/// Validates a batch of sequences and applies one named operation to the
/// valid ones.
#[derive(Clone, Copy, Debug)]
pub struct BatchRunner<'r> {
    registry: &'r OperationRegistry,
    abbreviation: Abbreviation,
    quiet: bool,
}

impl Default for BatchRunner<'static> {
    fn default() -> Self {
        Self::with_registry(OperationRegistry::standard())
    }
}

impl BatchRunner<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'r> BatchRunner<'r> {
    pub fn with_registry(registry: &'r OperationRegistry) -> Self {
        Self {
            registry,
            abbreviation: Abbreviation::OneLetter,
            quiet: false,
        }
    }

    pub fn abbreviation(mut self, abbreviation: Abbreviation) -> Self {
        self.abbreviation = abbreviation;
        self
    }

    /// Suppresses the summary normally printed to stdout.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Runs `operation` over `seqs`.
    ///
    /// An unknown operation fails before any sequence is looked at. Invalid
    /// sequences never fail the batch; they are collected as corrupted.
    pub fn run<S>(&self, seqs: &[S], operation: &str) -> BioResult<BatchOutcome>
    where
        S: AsRef<str> + Sync,
    {
        let op = self.registry.resolve(operation)?;
        let mode = self.abbreviation;

        let processed: Vec<BioResult<Processed>> =
            par_map!(seqs, |seq: &S| process(seq.as_ref(), mode, op));

        let mut results = Vec::new();
        let mut corrupted = Vec::new();
        for (idx, item) in processed.into_iter().enumerate() {
            match item? {
                Processed::Done(output) => {
                    debug!("sequence {idx}: {operation} ok");
                    results.push(output);
                }
                Processed::Rejected(raw) => {
                    debug!("sequence {idx}: corrupted");
                    corrupted.push((idx, raw));
                }
            }
        }

        let outcome = BatchOutcome {
            results,
            corrupted,
            total: seqs.len(),
        };
        info!(
            "{operation}: {} of {} sequence(s) processed, {} corrupted",
            outcome.results.len(),
            outcome.total,
            outcome.corrupted.len()
        );

        if !self.quiet {
            print!("{}", outcome.report());
        }
        Ok(outcome)
    }
}
