//! The divisor visualizer a slide embeds: manual column picking or an
//! autoplay demonstration that cycles through `autoplay_sequence`.
//!
//! Timing lives in the services layer; `step` is called once per tick.

use std::ops::RangeInclusive;

use crate::divisor::{
    DivisorError, DivisorTrial, ExplanationCategory, GridLayout, autoplay_sequence,
};

/// Largest column count offered as a button in manual mode.
pub const MAX_SELECTABLE_COLUMNS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerMode {
    Manual,
    Autoplay,
}

/// One autoplay step: the columns shown and what they demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayStep {
    pub columns: u32,
    pub explanation: ExplanationCategory,
}

/// Read-only state handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerSnapshot {
    pub number: u32,
    pub columns: u32,
    pub mode: VisualizerMode,
    pub layout: GridLayout,
    /// `None` in autoplay mode until the first step has run.
    pub explanation: Option<ExplanationCategory>,
    /// Manual mode found a divisor other than 1 and the number itself.
    pub shows_extra_factor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisorVisualizer {
    number: u32,
    max_selectable: u32,
    mode: VisualizerMode,
    trial: DivisorTrial,
    sequence: Vec<u32>,
    cursor: usize,
    last_step: Option<ExplanationCategory>,
}

impl DivisorVisualizer {
    /// # Errors
    ///
    /// Returns `DivisorError::ZeroNumber` for 0 and `DivisorError::Degenerate`
    /// for 1, which is neither prime nor composite.
    pub fn new(number: u32, mode: VisualizerMode) -> Result<Self, DivisorError> {
        if number == 1 {
            return Err(DivisorError::Degenerate { number });
        }
        let sequence = autoplay_sequence(number)?;
        Ok(Self {
            number,
            max_selectable: MAX_SELECTABLE_COLUMNS,
            mode,
            trial: DivisorTrial::new(number, 1)?,
            sequence,
            cursor: 0,
            last_step: None,
        })
    }

    /// Override the largest column button offered in manual mode (at least 1).
    #[must_use]
    pub fn with_max_selectable(mut self, max: u32) -> Self {
        self.max_selectable = max.max(1);
        self
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.trial.columns()
    }

    #[must_use]
    pub fn mode(&self) -> VisualizerMode {
        self.mode
    }

    #[must_use]
    pub fn is_autoplay(&self) -> bool {
        self.mode == VisualizerMode::Autoplay
    }

    #[must_use]
    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }

    /// Column counts the user may pick in manual mode.
    #[must_use]
    pub fn selectable_columns(&self) -> RangeInclusive<u32> {
        1..=self.number.min(self.max_selectable)
    }

    /// Pick a column count by hand.
    ///
    /// # Errors
    ///
    /// Returns `DivisorError::AutoplayActive` in autoplay mode and
    /// `DivisorError::ColumnsOutOfRange` outside `selectable_columns`.
    pub fn set_columns(&mut self, columns: u32) -> Result<GridLayout, DivisorError> {
        if self.is_autoplay() {
            return Err(DivisorError::AutoplayActive);
        }
        let range = self.selectable_columns();
        if !range.contains(&columns) {
            return Err(DivisorError::ColumnsOutOfRange {
                columns,
                max: *range.end(),
            });
        }
        self.trial = DivisorTrial::new(self.number, columns)?;
        Ok(self.trial.layout())
    }

    /// Switch modes. Returns `false` if the mode did not change.
    ///
    /// A change always restarts from one column with no explanation.
    pub fn set_mode(&mut self, mode: VisualizerMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.restart();
        true
    }

    /// Back to the initial state of the current mode.
    pub fn restart(&mut self) {
        self.trial = DivisorTrial::new(self.number, 1).unwrap_or(self.trial);
        self.cursor = 0;
        self.last_step = None;
    }

    /// Show the next candidate of the autoplay sequence, wrapping at the end.
    ///
    /// Does nothing in manual mode.
    pub fn step(&mut self) -> Option<AutoplayStep> {
        if !self.is_autoplay() {
            return None;
        }
        let columns = *self.sequence.get(self.cursor)?;
        self.trial = DivisorTrial::new(self.number, columns).ok()?;
        let explanation = self.trial.explanation();
        self.last_step = Some(explanation);
        self.cursor = (self.cursor + 1) % self.sequence.len();
        Some(AutoplayStep {
            columns,
            explanation,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> VisualizerSnapshot {
        let (explanation, shows_extra_factor) = match self.mode {
            VisualizerMode::Autoplay => (self.last_step, false),
            VisualizerMode::Manual => {
                let explanation = self.trial.explanation();
                (
                    Some(explanation),
                    explanation == ExplanationCategory::ExactFit,
                )
            }
        };
        VisualizerSnapshot {
            number: self.number,
            columns: self.trial.columns(),
            mode: self.mode,
            layout: self.trial.layout(),
            explanation,
            shows_extra_factor,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
