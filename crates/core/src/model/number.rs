use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primality::{self, NumberKind};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Data-entry mistakes found when checking lesson content against trial division.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("{value} is neither prime nor composite")]
    OutOfRange { value: u32 },

    #[error("{value} is listed as {declared:?} but is {actual:?}")]
    WrongKind {
        value: u32,
        declared: NumberKind,
        actual: NumberKind,
    },

    #[error("factors of {value} are listed as {declared:?} but are {actual:?}")]
    WrongFactors {
        value: u32,
        declared: Vec<u32>,
        actual: Vec<u32>,
    },

    #[error("quiz item {index} ({number}): {source}")]
    QuizItem {
        index: usize,
        number: u32,
        #[source]
        source: Box<ContentError>,
    },

    #[error("{slot} expects a different kind of number than {value}")]
    MisplacedFact { slot: &'static str, value: u32 },

    #[error("quiz has no items")]
    EmptyQuiz,
}

/// Check that `value` really is of the declared kind.
///
/// # Errors
///
/// Returns `ContentError::OutOfRange` for 0 and 1, `ContentError::WrongKind` on mismatch.
pub fn check_kind(value: u32, declared: NumberKind) -> Result<(), ContentError> {
    let actual = primality::classify(value).ok_or(ContentError::OutOfRange { value })?;
    if actual != declared {
        return Err(ContentError::WrongKind {
            value,
            declared,
            actual,
        });
    }
    Ok(())
}

//
// ─── NUMBER FACT ──────────────────────────────────────────────────────────────
//

/// A number introduced on a lesson slide, with its divisors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFact {
    pub value: u32,
    pub is_prime: bool,
    /// All positive divisors, ascending (e.g. for 4: `[1, 2, 4]`).
    pub factors: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NumberFact {
    #[must_use]
    pub fn new(value: u32, is_prime: bool, factors: Vec<u32>) -> Self {
        Self {
            value,
            is_prime,
            factors,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> NumberKind {
        NumberKind::from_is_prime(self.is_prime)
    }

    /// Verify `is_prime` and `factors` by trial division.
    ///
    /// # Errors
    ///
    /// Returns the first `ContentError` found.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_kind(self.value, self.kind())?;
        let actual = primality::divisors(self.value);
        if actual != self.factors {
            return Err(ContentError::WrongFactors {
                value: self.value,
                declared: self.factors.clone(),
                actual,
            });
        }
        Ok(())
    }
}

//
// ─── QUIZ ITEM ────────────────────────────────────────────────────────────────
//

/// One quiz question: a number and whether it is prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub number: u32,
    pub is_prime: bool,
}

impl QuizItem {
    #[must_use]
    pub fn new(number: u32, is_prime: bool) -> Self {
        Self { number, is_prime }
    }

    /// # Errors
    ///
    /// Returns `ContentError` when `is_prime` does not match the number.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_kind(self.number, NumberKind::from_is_prime(self.is_prime))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
