//! The quiz scorer: one answer per question, a feedback window, then the next
//! question or the final score.
//!
//! The feedback window's duration is owned by the caller; `complete_feedback`
//! is what the caller runs when it elapses.

use thiserror::Error;

use crate::model::QuizItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one item")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Asking,
    Feedback(AnswerOutcome),
    Finished,
}

/// What the learner sees for the current question. Carries no primality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub number: u32,
    pub index: usize,
    pub total: usize,
}

/// Correct answers out of the number of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub correct: usize,
    pub total: usize,
}

impl FinalScore {
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.correct == self.total
    }
}

/// Result of closing a feedback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackResolution {
    NextQuestion(QuizQuestion),
    Finished(FinalScore),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    current: usize,
    score: usize,
    state: QuizState,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if `items` is empty.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, QuizError> {
        if items.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            score: 0,
            state: QuizState::Asking,
        })
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Index of the question on screen; equals `total` once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn pending_feedback(&self) -> Option<AnswerOutcome> {
        match self.state {
            QuizState::Feedback(outcome) => Some(outcome),
            QuizState::Asking | QuizState::Finished => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<QuizQuestion> {
        self.current_item().map(|item| QuizQuestion {
            number: item.number,
            index: self.current,
            total: self.items.len(),
        })
    }

    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            correct: self.score,
            total: self.items.len(),
        }
    }

    /// Share of questions already moved past, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.current as f64 / self.items.len() as f64
    }

    /// Answer the current question.
    ///
    /// Returns `None` and changes nothing while feedback is showing or after
    /// the quiz finished.
    pub fn submit_answer(&mut self, claim_is_prime: bool) -> Option<AnswerOutcome> {
        if self.state != QuizState::Asking {
            return None;
        }
        let item = self.items.get(self.current)?;
        let outcome = if claim_is_prime == item.is_prime {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };
        self.state = QuizState::Feedback(outcome);
        Some(outcome)
    }

    /// Close the feedback window: move to the next question or finish.
    ///
    /// Returns `None` if no feedback was showing.
    pub fn complete_feedback(&mut self) -> Option<FeedbackResolution> {
        if self.pending_feedback().is_none() {
            return None;
        }
        if self.current + 1 < self.items.len() {
            self.current += 1;
            self.state = QuizState::Asking;
            self.current_question().map(FeedbackResolution::NextQuestion)
        } else {
            self.current = self.items.len();
            self.state = QuizState::Finished;
            Some(FeedbackResolution::Finished(self.final_score()))
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
