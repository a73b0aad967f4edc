//! Grid math for arranging `number` items into `columns` equal groups.

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DivisorError {
    #[error("number must be at least 1")]
    ZeroNumber,

    #[error("columns must be between 1 and {max}, got {columns}")]
    ColumnsOutOfRange { columns: u32, max: u32 },

    #[error("{number} cannot be shown as prime or composite")]
    Degenerate { number: u32 },

    #[error("columns cannot be chosen while autoplay is running")]
    AutoplayActive,
}

//
// ─── LAYOUT ───────────────────────────────────────────────────────────────────
//

/// Shape of a divisor trial: how many rows, and how many items spill over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub remainder: u32,
    pub is_exact: bool,
}

/// Lay out `number` items in `columns` columns.
///
/// # Errors
///
/// Returns `DivisorError::ZeroNumber` for 0 and `DivisorError::ColumnsOutOfRange`
/// unless `1 <= columns <= number`.
pub fn layout(number: u32, columns: u32) -> Result<GridLayout, DivisorError> {
    if number == 0 {
        return Err(DivisorError::ZeroNumber);
    }
    if columns == 0 || columns > number {
        return Err(DivisorError::ColumnsOutOfRange {
            columns,
            max: number,
        });
    }
    let remainder = number % columns;
    Ok(GridLayout {
        rows: number.div_ceil(columns),
        remainder,
        is_exact: remainder == 0,
    })
}

/// A validated `(number, columns)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisorTrial {
    number: u32,
    columns: u32,
}

impl DivisorTrial {
    /// # Errors
    ///
    /// Same as `layout`.
    pub fn new(number: u32, columns: u32) -> Result<Self, DivisorError> {
        layout(number, columns)?;
        Ok(Self { number, columns })
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        let remainder = self.number % self.columns;
        GridLayout {
            rows: self.number.div_ceil(self.columns),
            remainder,
            is_exact: remainder == 0,
        }
    }

    #[must_use]
    pub fn explanation(&self) -> ExplanationCategory {
        categorize(self.number, self.columns)
    }
}

//
// ─── AUTOPLAY SEQUENCE ────────────────────────────────────────────────────────
//

/// Column counts the autoplay demonstration steps through.
///
/// Every value in `1..=ceil(number / 2)`, then `number` itself when it is
/// larger than 1; ascending and without duplicates. Most entries do not
/// divide `number`, which is the point of the demonstration.
///
/// # Errors
///
/// Returns `DivisorError::ZeroNumber` for 0.
pub fn autoplay_sequence(number: u32) -> Result<Vec<u32>, DivisorError> {
    if number == 0 {
        return Err(DivisorError::ZeroNumber);
    }
    let mut sequence: Vec<u32> = (1..=number.div_ceil(2)).collect();
    if number > 1 {
        sequence.push(number);
    }
    sequence.sort_unstable();
    sequence.dedup();
    Ok(sequence)
}

//
// ─── EXPLANATIONS ─────────────────────────────────────────────────────────────
//

/// What a single divisor trial shows. The UI maps each category to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationCategory {
    /// One column: everyone in a single line.
    FirstStep,
    /// As many columns as items: everyone alone.
    LastStep,
    /// Splits evenly into a non-trivial number of columns.
    ExactFit,
    /// Leaves `remainder` items over.
    NotExact { remainder: u32 },
}

fn categorize(number: u32, divisor: u32) -> ExplanationCategory {
    let remainder = number % divisor;
    if divisor == 1 {
        ExplanationCategory::FirstStep
    } else if divisor == number {
        ExplanationCategory::LastStep
    } else if remainder == 0 {
        ExplanationCategory::ExactFit
    } else {
        ExplanationCategory::NotExact { remainder }
    }
}

/// Classify the trial of `number` split into `divisor` columns.
///
/// The first matching rule wins: 1, then `number`, then exact, then not exact.
///
/// # Errors
///
/// Same as `layout`.
pub fn explanation_for(number: u32, divisor: u32) -> Result<ExplanationCategory, DivisorError> {
    layout(number, divisor)?;
    Ok(categorize(number, divisor))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
