use pyo3::prelude::*;

mod analyzer;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    analyzer::register(m)?;
    Ok(())
}
