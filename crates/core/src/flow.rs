//! Slide sequencing for the lesson.

use crate::model::LessonPhase;

/// A phase change produced by `LessonFlow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: LessonPhase,
    pub to: LessonPhase,
}

/// Forward-only state machine over `LessonPhase`.
///
/// The only way back is `reset`, which returns to `Welcome` from anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonFlow {
    phase: LessonPhase,
}

impl LessonFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> LessonPhase {
        self.phase
    }

    /// Move to the next slide.
    ///
    /// Returns `None` (and changes nothing) when already on the quiz.
    pub fn advance(&mut self) -> Option<PhaseTransition> {
        let from = self.phase;
        let to = from.next()?;
        self.phase = to;
        Some(PhaseTransition { from, to })
    }

    /// Return to the welcome slide.
    pub fn reset(&mut self) -> PhaseTransition {
        let from = self.phase;
        self.phase = LessonPhase::Welcome;
        PhaseTransition {
            from,
            to: LessonPhase::Welcome,
        }
    }
}
