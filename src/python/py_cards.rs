//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{self, Card, Rank, Suit};

/// Python wrapper for Card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Suit name, or None for jokers.
    #[getter]
    fn suit(&self) -> Option<&'static str> {
        self.0.suit().map(Suit::name)
    }

    /// Rank name, or None for jokers.
    #[getter]
    fn rank(&self) -> Option<&'static str> {
        self.0.rank().map(Rank::name)
    }

    #[getter]
    fn is_joker(&self) -> bool {
        self.0.is_joker()
    }

    #[getter]
    fn sort_order(&self) -> u8 {
        self.0.sort_order()
    }

    /// Scoring value. Aces are 11 when ace_high, else 1.
    #[pyo3(signature = (ace_high = true))]
    fn get_value(&self, ace_high: bool) -> u8 {
        self.0.value(ace_high)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.sort_order())
    }
}

fn parse_suit(name: &str) -> PyResult<Suit> {
    Suit::ALL
        .into_iter()
        .find(|suit| suit.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| PyValueError::new_err(format!("Unknown suit: {}", name)))
}

fn parse_rank(name: &str) -> PyResult<Rank> {
    Rank::ALL
        .into_iter()
        .find(|rank| rank.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| PyValueError::new_err(format!("Unknown rank: {}", name)))
}

/// Create a standard card from suit and rank names ("hearts", "queen", "10").
#[pyfunction]
pub fn create_card(suit: &str, rank: &str) -> PyResult<PyCard> {
    Ok(PyCard(cards::create_card(parse_suit(suit)?, parse_rank(rank)?)))
}
