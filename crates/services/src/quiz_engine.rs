use chrono::{DateTime, Duration, Utc};

use lesson_core::model::{QuizItem, SlideId, TimerId};
use lesson_core::quiz::{
    AnswerOutcome, FeedbackResolution, FinalScore, QuizQuestion, QuizSession,
};

use crate::error::LessonError;
use crate::settings::check_delay;
use crate::timer::{FiredTimer, TimerKind, TimerQueue};

/// What the quiz slide renders.
///
/// `question` only carries the number: the answer is never exposed before
/// it has been given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizSnapshot {
    pub question: Option<QuizQuestion>,
    pub pending_feedback: Option<AnswerOutcome>,
    pub score: usize,
    pub current_index: usize,
    pub total: usize,
    pub progress: f64,
    pub final_score: Option<FinalScore>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.final_score.is_some()
    }
}

/// A `QuizSession` plus the feedback timer that moves it along.
#[derive(Debug)]
pub struct QuizEngine {
    slide: SlideId,
    session: QuizSession,
    feedback_delay: Duration,
    feedback_timer: Option<TimerId>,
}

impl QuizEngine {
    /// # Errors
    ///
    /// Returns `LessonError::Quiz` if `items` is empty and
    /// `LessonError::Settings` if `feedback_delay` is not positive or longer
    /// than an hour.
    pub fn new(
        slide: SlideId,
        items: Vec<QuizItem>,
        feedback_delay: Duration,
    ) -> Result<Self, LessonError> {
        check_delay("feedback_delay", feedback_delay)?;
        Ok(Self {
            slide,
            session: QuizSession::new(items)?,
            feedback_delay,
            feedback_timer: None,
        })
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn feedback_timer(&self) -> Option<TimerId> {
        self.feedback_timer
    }

    /// Answer the current question and start the feedback window.
    ///
    /// Extra answers during the window, or after the end, return `None`.
    pub fn submit_answer(
        &mut self,
        claim_is_prime: bool,
        timers: &mut TimerQueue,
        now: DateTime<Utc>,
    ) -> Option<AnswerOutcome> {
        let Some(outcome) = self.session.submit_answer(claim_is_prime) else {
            tracing::debug!(slide = %self.slide, "answer ignored");
            return None;
        };
        match now.checked_add_signed(self.feedback_delay) {
            Some(deadline) => {
                self.feedback_timer =
                    Some(timers.schedule(self.slide, TimerKind::QuizFeedback, deadline));
            }
            None => tracing::warn!(%now, "feedback deadline out of range; not scheduled"),
        }
        tracing::info!(
            index = self.session.current_index(),
            ?outcome,
            score = self.session.score(),
            "quiz answer"
        );
        Some(outcome)
    }

    /// Handle a fired timer. Anything but the current feedback timer is ignored.
    pub fn on_timer(&mut self, fired: FiredTimer) -> Option<FeedbackResolution> {
        if fired.owner != self.slide || self.feedback_timer != Some(fired.id) {
            tracing::debug!(timer = %fired.id, slide = %self.slide, "ignoring foreign timer");
            return None;
        }
        self.feedback_timer = None;
        let resolution = self.session.complete_feedback()?;
        if let FeedbackResolution::Finished(score) = resolution {
            tracing::info!(correct = score.correct, total = score.total, "quiz finished");
        }
        Some(resolution)
    }

    /// Cancel the pending feedback timer, if any.
    pub fn dispose(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.feedback_timer.take() {
            timers.cancel(id);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            question: self.session.current_question(),
            pending_feedback: self.session.pending_feedback(),
            score: self.session.score(),
            current_index: self.session.current_index(),
            total: self.session.total(),
            progress: self.session.progress(),
            final_score: self
                .session
                .is_finished()
                .then(|| self.session.final_score()),
        }
    }
}
