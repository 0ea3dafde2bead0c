#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule, PyTuple};

use protan_core::analyzer::BatchRunner;
use protan_core::seq::{validate, Verdict};
use protan_core::stats;

use crate::utils::{self, collapsed_to_py, output_to_py, raw_to_py};

/// run_protein_analyzer_tool(*seqs, operation, abbreviation=1)
///
/// Validates every sequence, applies `operation` to the valid ones and prints
/// a summary. Returns `(results, corrupted)`; either is unwrapped when it
/// holds exactly one entry.
#[pyfunction]
#[pyo3(signature = (*args, abbreviation = 1))]
fn run_protein_analyzer_tool(
    py: Python<'_>,
    args: &Bound<'_, PyTuple>,
    abbreviation: i64,
) -> PyResult<(PyObject, PyObject)> {
    let mode = utils::parse_abbreviation(abbreviation)?;
    let mut items = args
        .iter()
        .map(|item| {
            item.extract::<String>()
                .map_err(|_| PyTypeError::new_err("sequences and operation must be str"))
        })
        .collect::<PyResult<Vec<String>>>()?;
    let operation = items
        .pop()
        .ok_or_else(|| PyTypeError::new_err("expected sequences followed by an operation name"))?;

    let runner = BatchRunner::new().abbreviation(mode).quiet(true);
    let outcome = py
        .allow_threads(|| runner.run(&items, &operation))
        .map_err(utils::value_error)?;

    let summary = outcome.report().to_string();
    let print = py.import_bound("builtins")?.getattr("print")?;
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("end", "")?;
    print.call((summary,), Some(&kwargs))?;

    let (results, corrupted) = outcome.into_collapsed();
    let results = collapsed_to_py(py, results, output_to_py)?;
    let corrupted = collapsed_to_py(py, corrupted, |py, (idx, raw)| {
        Ok((idx, raw_to_py(py, raw)).into_py(py))
    })?;
    Ok((results, corrupted))
}

/// check_seq(seq, abbreviation=1) -> (bool, str | list[str])
#[pyfunction]
#[pyo3(signature = (seq, abbreviation = 1))]
fn check_seq(py: Python<'_>, seq: &str, abbreviation: i64) -> PyResult<(bool, PyObject)> {
    let mode = utils::parse_abbreviation(abbreviation)?;
    match validate(seq, mode).map_err(utils::value_error)? {
        Verdict::Valid(protein) => Ok((true, protein.to_string().into_py(py))),
        Verdict::Corrupted(raw) => Ok((false, raw_to_py(py, raw))),
    }
}

/// mann_whitney_u(x, y) -> bool
///
/// True when the samples cannot be told apart at the fixed critical U of 127.
#[pyfunction]
fn mann_whitney_u(x: Vec<f64>, y: Vec<f64>) -> PyResult<bool> {
    stats::compare(&x, &y).map_err(utils::value_error)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_protein_analyzer_tool, m)?)?;
    m.add_function(wrap_pyfunction!(check_seq, m)?)?;
    m.add_function(wrap_pyfunction!(mann_whitney_u, m)?)?;
    Ok(())
}
