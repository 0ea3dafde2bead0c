use crate::error::{BioError, BioResult};
use crate::seq::protein::{Composition, Formula, ProteinSeq};
use std::sync::LazyLock;

/// Result of applying one operation to a validated sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Composition(Composition),
    Length(usize),
    Formula(Formula),
    Mass(f64),
    Charge(i64),
}

/// A pure, deterministic computation over a validated sequence.
pub type Operation = fn(&ProteinSeq) -> Output;

pub fn content_check(seq: &ProteinSeq) -> Output {
    Output::Composition(seq.composition())
}

pub fn seq_length(seq: &ProteinSeq) -> Output {
    Output::Length(seq.len())
}

pub fn protein_formula(seq: &ProteinSeq) -> Output {
    Output::Formula(seq.formula())
}

pub fn protein_mass(seq: &ProteinSeq) -> Output {
    Output::Mass(seq.molecular_weight())
}

pub fn charge(seq: &ProteinSeq) -> Output {
    Output::Charge(seq.charge())
}

static STANDARD: LazyLock<OperationRegistry> = LazyLock::new(|| {
    OperationRegistry::new()
        .with("content_check", content_check)
        .with("seq_length", seq_length)
        .with("protein_formula", protein_formula)
        .with("protein_mass", protein_mass)
        .with("charge", charge)
});

/// Name to operation mapping, fixed once built.
#[derive(Clone, Debug, Default)]
pub struct OperationRegistry {
    ops: Vec<(&'static str, Operation)>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// The five built-in operations.
    pub fn standard() -> &'static OperationRegistry {
        &STANDARD
    }

    /// Adds `op` under `name`, replacing an earlier entry of the same name.
    pub fn with(mut self, name: &'static str, op: Operation) -> Self {
        match self.ops.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = op,
            None => self.ops.push((name, op)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Operation> {
        self.ops
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, op)| op)
    }

    pub fn resolve(&self, name: &str) -> BioResult<Operation> {
        self.get(name).ok_or_else(|| BioError::UnknownOperation {
            name: name.to_string(),
            known: self.names(),
        })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.ops.iter().map(|&(n, _)| n).collect()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
