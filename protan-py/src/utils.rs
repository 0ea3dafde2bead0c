use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use protan_core::analyzer::{OneOrMany, Output};
use protan_core::error::BioError;
use protan_core::seq::{Abbreviation, RawSeq};

pub fn value_error(err: BioError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn parse_abbreviation(value: i64) -> PyResult<Abbreviation> {
    Abbreviation::try_from(value).map_err(value_error)
}

pub fn output_to_py(py: Python<'_>, output: Output) -> PyResult<PyObject> {
    Ok(match output {
        Output::Composition(comp) => {
            let dict = PyDict::new_bound(py);
            for (code, pct) in comp.iter() {
                dict.set_item(code.to_string(), pct)?;
            }
            dict.to_object(py)
        }
        Output::Length(len) => len.into_py(py),
        Output::Formula(formula) => formula.to_string().into_py(py),
        Output::Mass(mass) => mass.into_py(py),
        Output::Charge(charge) => charge.into_py(py),
    })
}

pub fn raw_to_py(py: Python<'_>, raw: RawSeq) -> PyObject {
    match raw {
        RawSeq::Letters(s) => s.into_py(py),
        RawSeq::Tokens(tokens) => PyList::new_bound(py, tokens).to_object(py),
    }
}

/// Bare object for a single entry, list otherwise.
pub fn collapsed_to_py<T, F>(py: Python<'_>, value: OneOrMany<T>, mut convert: F) -> PyResult<PyObject>
where
    F: FnMut(Python<'_>, T) -> PyResult<PyObject>,
{
    match value {
        OneOrMany::One(item) => convert(py, item),
        OneOrMany::Many(items) => {
            let objs = items
                .into_iter()
                .map(|item| convert(py, item))
                .collect::<PyResult<Vec<_>>>()?;
            Ok(PyList::new_bound(py, objs).to_object(py))
        }
    }
}
