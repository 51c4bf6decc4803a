use log::debug;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

pub mod pair;

pub use pair::{pack_pair, PAIR_LEN};

// Python-exposed functions
#[pyfunction]
#[pyo3(signature = (a, b))]
fn function_with_cpp_args<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
) -> Bound<'py, PyTuple> {
    let (first, second) = pack_pair(a, b);
    PyTuple::new_bound(py, [first, second])
}

// Python module definition
#[pymodule]
pub fn compiled_function_with_cpp_args(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(function_with_cpp_args, m)?)?;
    debug!("event=module_init module=compiled_function_with_cpp_args status=ok");
    Ok(())
}
