use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyze;
use crate::distribution::DEFAULT_BIN_SIZE;
use crate::error::AnalyticsError;
use crate::mmp::DEFAULT_MMP_DURATIONS;

fn to_py_err(e: AnalyticsError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyfunction]
#[pyo3(signature = (records_json, athlete_weight=None))]
fn best_efforts_json(records_json: &str, athlete_weight: Option<f64>) -> PyResult<String> {
    analyze::best_efforts_json(records_json, athlete_weight).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (records_json, durations=None))]
fn mmp_curve_json(records_json: &str, durations: Option<Vec<u32>>) -> PyResult<String> {
    let durations = durations.unwrap_or_else(|| DEFAULT_MMP_DURATIONS.to_vec());
    analyze::mmp_curve_json(records_json, &durations).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (records_json, bin_size=DEFAULT_BIN_SIZE))]
fn power_distribution_json(records_json: &str, bin_size: u32) -> PyResult<String> {
    analyze::power_distribution_json(records_json, bin_size).map_err(to_py_err)
}

#[pyfunction]
fn analyze_activity_json(payload: &str) -> PyResult<String> {
    analyze::analyze_activity_json(payload).map_err(to_py_err)
}

#[pymodule]
fn activity_analytics_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(best_efforts_json, m)?)?;
    m.add_function(wrap_pyfunction!(mmp_curve_json, m)?)?;
    m.add_function(wrap_pyfunction!(power_distribution_json, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_activity_json, m)?)?;
    Ok(())
}
