//! Dice bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameRng;
use crate::dice::{DiceBatch, DiceRoller, DieResult};

use super::clamp_count;

/// Python wrapper for DieResult.
#[pyclass(name = "DieResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyDieResult(pub DieResult);

#[pymethods]
impl PyDieResult {
    #[getter]
    fn value(&self) -> u32 {
        self.0.value
    }

    /// Side count of the die that produced this result.
    #[getter]
    fn die_type(&self) -> u32 {
        self.0.die_type.sides()
    }

    fn __repr__(&self) -> String {
        format!("DieResult(value={}, die_type={})", self.0.value, self.0.die_type)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn wrap(batch: DiceBatch) -> Vec<PyDieResult> {
    batch.into_iter().map(PyDieResult).collect()
}

fn value_error(err: crate::core::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for DiceRoller.
#[pyclass(name = "DiceRoller")]
pub struct PyDiceRoller(pub DiceRoller);

#[pymethods]
impl PyDiceRoller {
    /// Create a roller. Seeded from OS entropy when `seed` is omitted.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self(DiceRoller::with_rng(rng))
    }

    /// Roll dice: `roll(3, 6)` or `roll("3d6")`.
    ///
    /// Raises ValueError for malformed notation or unsupported die types.
    #[pyo3(signature = (count_or_notation, die_type = None))]
    fn roll(
        &mut self,
        count_or_notation: &Bound<'_, PyAny>,
        die_type: Option<u32>,
    ) -> PyResult<Vec<PyDieResult>> {
        let batch = if let Ok(notation) = count_or_notation.extract::<String>() {
            self.0.roll_notation(&notation)
        } else {
            let count = clamp_count(count_or_notation.extract::<i64>()?);
            let sides = die_type
                .ok_or_else(|| PyValueError::new_err("die_type is required with a numeric count"))?;
            self.0.roll_sides(count, sides)
        };
        batch.map(wrap).map_err(value_error)
    }

    fn get_sum(&self) -> u64 {
        self.0.sum()
    }

    /// Last-roll results for which `predicate(die)` is truthy.
    fn filter_dice(&self, predicate: &Bound<'_, PyAny>) -> PyResult<Vec<PyDieResult>> {
        let mut kept = Vec::new();
        for die in self.0.results() {
            let candidate = PyDieResult(*die);
            if predicate.call1((candidate.clone(),))?.is_truthy()? {
                kept.push(candidate);
            }
        }
        Ok(kept)
    }

    fn keep_values(&self, values: Vec<u32>) -> Vec<PyDieResult> {
        wrap(self.0.keep_values(&values))
    }

    fn remove_values(&self, values: Vec<u32>) -> Vec<PyDieResult> {
        wrap(self.0.remove_values(&values))
    }

    fn keep_highest(&self, count: i64) -> Vec<PyDieResult> {
        wrap(self.0.keep_highest(clamp_count(count)))
    }

    fn keep_lowest(&self, count: i64) -> Vec<PyDieResult> {
        wrap(self.0.keep_lowest(clamp_count(count)))
    }

    #[getter]
    fn results(&self) -> Vec<PyDieResult> {
        self.0.results().iter().copied().map(PyDieResult).collect()
    }
}
