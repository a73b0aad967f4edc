use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use lesson_core::divisor::GridLayout;
use lesson_core::model::{LessonContent, LessonPhase, SlideId};
use lesson_core::quiz::{AnswerOutcome, FinalScore, QuizSession};
use lesson_core::visualizer::{DivisorVisualizer, VisualizerMode};
use lesson_core::{Clock, LessonFlow, PhaseTransition};

use super::slide::{ActiveSlide, SlideComponent};
use super::view::LessonSnapshot;
use crate::error::LessonError;
use crate::settings::LessonSettings;
use crate::timer::TimerQueue;

/// Outcome of `LessonController::reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetReport {
    pub transition: PhaseTransition,
    /// Set when a finished quiz was on screen.
    pub final_score: Option<FinalScore>,
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Runs a whole lesson: the slide sequence, the component embedded in the
/// current slide, and the timers that drive them.
///
/// All input goes through `&mut self`, so timers and clicks are applied one
/// at a time in the order they arrive.
pub struct LessonController {
    clock: Clock,
    settings: LessonSettings,
    content: Arc<LessonContent>,
    flow: LessonFlow,
    timers: TimerQueue,
    slide: ActiveSlide,
    last_slide_id: SlideId,
}

impl LessonController {
    /// Create a controller on the welcome slide.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Settings` for invalid settings, `LessonError::Quiz`
    /// for an empty quiz and `LessonError::Divisor` when an intro number cannot
    /// be visualized.
    pub fn new(
        content: Arc<LessonContent>,
        settings: LessonSettings,
        clock: Clock,
    ) -> Result<Self, LessonError> {
        settings.validate()?;
        QuizSession::new(content.quiz.clone())?;
        for number in [content.intro_prime.value, content.intro_composite.value] {
            DivisorVisualizer::new(number, VisualizerMode::Autoplay)?;
        }

        let first = SlideId::new(0);
        Ok(Self {
            clock,
            settings,
            content,
            flow: LessonFlow::new(),
            timers: TimerQueue::new(),
            slide: ActiveSlide::static_slide(first, LessonPhase::Welcome),
            last_slide_id: first,
        })
    }

    #[must_use]
    pub fn phase(&self) -> LessonPhase {
        self.flow.phase()
    }

    #[must_use]
    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    #[must_use]
    pub fn settings(&self) -> &LessonSettings {
        &self.settings
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Deadline of the next pending timer, for the caller's wake-up.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn next_slide_id(&mut self) -> SlideId {
        self.last_slide_id = self.last_slide_id.next();
        self.last_slide_id
    }

    /// Go to the next slide. A no-op on the quiz.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the next slide's component cannot be built;
    /// the current slide stays up in that case.
    pub fn advance(&mut self) -> Result<Option<PhaseTransition>, LessonError> {
        let Some(next) = self.flow.phase().next() else {
            tracing::debug!("advance ignored on the last slide");
            return Ok(None);
        };

        let id = self.next_slide_id();
        let now = self.clock.now();
        let slide =
            match ActiveSlide::build(id, next, &self.content, &self.settings, &mut self.timers, now)
            {
                Ok(slide) => slide,
                Err(err) => {
                    self.timers.cancel_owner(id);
                    return Err(err);
                }
            };

        self.slide.dispose(&mut self.timers);
        self.slide = slide;
        let transition = self.flow.advance();
        if let Some(t) = transition {
            tracing::info!(from = %t.from, to = %t.to, slide = %id, "phase advanced");
        }
        Ok(transition)
    }

    /// Back to the welcome slide, discarding the current slide and its timers.
    pub fn reset(&mut self) -> ResetReport {
        let final_score = match &self.slide.component {
            SlideComponent::Quiz(quiz) if quiz.session().is_finished() => {
                Some(quiz.session().final_score())
            }
            _ => None,
        };

        self.slide.dispose(&mut self.timers);
        let id = self.next_slide_id();
        self.slide = ActiveSlide::static_slide(id, LessonPhase::Welcome);
        let transition = self.flow.reset();
        tracing::info!(from = %transition.from, ?final_score, "lesson reset");

        ResetReport {
            transition,
            final_score,
        }
    }

    /// Pick the visualizer's column count by hand.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NoVisualizer` on slides without one and
    /// `LessonError::Divisor` for rejected column counts.
    pub fn set_columns(&mut self, columns: u32) -> Result<GridLayout, LessonError> {
        let phase = self.slide.phase;
        match &mut self.slide.component {
            SlideComponent::Visualizer(host) => Ok(host.set_columns(columns)?),
            _ => Err(LessonError::NoVisualizer { phase }),
        }
    }

    /// # Errors
    ///
    /// Returns `LessonError::NoVisualizer` on slides without a visualizer.
    pub fn set_autoplay(&mut self, enabled: bool) -> Result<(), LessonError> {
        let phase = self.slide.phase;
        let now = self.clock.now();
        match &mut self.slide.component {
            SlideComponent::Visualizer(host) => {
                host.set_autoplay(enabled, &mut self.timers, now);
                Ok(())
            }
            _ => Err(LessonError::NoVisualizer { phase }),
        }
    }

    /// Answer the current quiz question. `Ok(None)` means the answer was
    /// ignored because feedback is showing or the quiz is over.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NotInQuiz` outside the quiz slide.
    pub fn submit_answer(&mut self, claim_is_prime: bool) -> Result<Option<AnswerOutcome>, LessonError> {
        let phase = self.slide.phase;
        let now = self.clock.now();
        match &mut self.slide.component {
            SlideComponent::Quiz(quiz) => Ok(quiz.submit_answer(claim_is_prime, &mut self.timers, now)),
            _ => Err(LessonError::NotInQuiz { phase }),
        }
    }

    /// Fire every timer due at the clock's current time, in order.
    ///
    /// Returns how many of them changed the slide's state.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut changed = 0;
        while let Some(fired) = self.timers.pop_due(now) {
            if fired.owner != self.slide.id {
                tracing::debug!(timer = %fired.id, owner = %fired.owner, "dropping stale timer");
                continue;
            }
            if self.slide.on_timer(fired, &mut self.timers) {
                changed += 1;
            }
        }
        changed
    }

    /// Move a manual clock forward and fire what became due.
    ///
    /// With the system clock this only fires what is already due.
    pub fn advance_time(&mut self, delta: Duration) -> usize {
        if !self.clock.advance(delta) {
            tracing::debug!("advance_time on the system clock has no effect");
        }
        self.tick()
    }

    #[must_use]
    pub fn snapshot(&self) -> LessonSnapshot {
        let (visualizer, quiz) = match &self.slide.component {
            SlideComponent::Static => (None, None),
            SlideComponent::Visualizer(host) => (Some(host.snapshot()), None),
            SlideComponent::Quiz(quiz) => (None, Some(quiz.snapshot())),
        };
        LessonSnapshot {
            phase: self.flow.phase(),
            slide: self.slide.id,
            visualizer,
            quiz,
        }
    }
}

impl fmt::Debug for LessonController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonController")
            .field("phase", &self.flow.phase())
            .field("slide", &self.slide.id)
            .field("pending_timers", &self.timers.len())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::divisor::{DivisorError, ExplanationCategory};
    use lesson_core::model::{NumberFact, QuizItem};
    use lesson_core::quiz::QuizError;
    use lesson_core::time::fixed_clock;
    use crate::timer::TimerKind;

    fn controller() -> LessonController {
        LessonController::new(
            Arc::new(LessonContent::bundled()),
            LessonSettings::default(),
            fixed_clock(),
        )
        .unwrap()
    }

    fn go_to(ctrl: &mut LessonController, phase: LessonPhase) {
        while ctrl.phase() != phase {
            ctrl.advance().unwrap();
        }
    }

    #[test]
    fn starts_on_welcome_without_timers() {
        let ctrl = controller();
        let snap = ctrl.snapshot();
        assert_eq!(snap.phase, LessonPhase::Welcome);
        assert_eq!(snap.visualizer, None);
        assert_eq!(snap.quiz, None);
        assert_eq!(ctrl.pending_timers(), 0);
    }

    #[test]
    fn intro_slides_autoplay_their_number() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::IntroPrime2);
        assert_eq!(ctrl.pending_timers(), 1);

        ctrl.advance_time(Duration::milliseconds(2500));
        let vis = ctrl.snapshot().visualizer.unwrap();
        assert_eq!(vis.number, 2);
        assert_eq!(vis.explanation, Some(ExplanationCategory::FirstStep));

        ctrl.advance_time(Duration::milliseconds(2500));
        let vis = ctrl.snapshot().visualizer.unwrap();
        assert_eq!(vis.columns, 2);
        assert_eq!(vis.explanation, Some(ExplanationCategory::LastStep));
    }

    #[test]
    fn leaving_a_slide_cancels_its_ticker() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::IntroPrime2);
        ctrl.advance().unwrap();
        assert_eq!(ctrl.phase(), LessonPhase::IntroPrimesOthers);
        assert_eq!(ctrl.pending_timers(), 0);
        assert_eq!(ctrl.advance_time(Duration::seconds(30)), 0);
    }

    #[test]
    fn reentering_intro_starts_a_fresh_visualizer() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::IntroComposite4);
        ctrl.advance_time(Duration::milliseconds(5000));
        assert_eq!(ctrl.snapshot().visualizer.unwrap().columns, 2);

        ctrl.reset();
        go_to(&mut ctrl, LessonPhase::IntroComposite4);
        let vis = ctrl.snapshot().visualizer.unwrap();
        assert_eq!(vis.columns, 1);
        assert_eq!(vis.explanation, None);
    }

    #[test]
    fn manual_columns_only_after_autoplay_is_off() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::IntroComposite4);
        assert!(matches!(
            ctrl.set_columns(2),
            Err(LessonError::Divisor(DivisorError::AutoplayActive))
        ));

        ctrl.set_autoplay(false).unwrap();
        assert_eq!(ctrl.pending_timers(), 0);
        assert!(ctrl.set_columns(2).unwrap().is_exact);
        assert!(ctrl.snapshot().visualizer.unwrap().shows_extra_factor);
    }

    #[test]
    fn visualizer_inputs_are_rejected_elsewhere() {
        let mut ctrl = controller();
        assert!(matches!(
            ctrl.set_columns(1),
            Err(LessonError::NoVisualizer {
                phase: LessonPhase::Welcome
            })
        ));
        assert!(matches!(
            ctrl.submit_answer(true),
            Err(LessonError::NotInQuiz { .. })
        ));
    }

    #[test]
    fn reset_during_feedback_discards_the_timer() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::Quiz);
        assert_eq!(ctrl.submit_answer(true).unwrap(), Some(AnswerOutcome::Correct));
        assert_eq!(ctrl.pending_timers(), 1);

        let report = ctrl.reset();
        assert_eq!(report.final_score, None);
        assert_eq!(report.transition.from, LessonPhase::Quiz);
        assert_eq!(ctrl.pending_timers(), 0);
        assert_eq!(ctrl.advance_time(Duration::seconds(5)), 0);
        assert_eq!(ctrl.phase(), LessonPhase::Welcome);
    }

    #[test]
    fn advance_on_quiz_keeps_the_session() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::Quiz);
        ctrl.submit_answer(true).unwrap();
        let before = ctrl.snapshot();

        assert_eq!(ctrl.advance().unwrap(), None);
        assert_eq!(ctrl.snapshot(), before);
    }

    #[test]
    fn timer_owned_by_an_old_slide_is_dropped() {
        let mut ctrl = controller();
        go_to(&mut ctrl, LessonPhase::IntroPrime2);
        let old_slide = ctrl.snapshot().slide;
        go_to(&mut ctrl, LessonPhase::IntroComposite4);
        ctrl.set_autoplay(false).unwrap();
        let before = ctrl.snapshot();

        let now = ctrl.now();
        ctrl.timers.schedule(old_slide, TimerKind::AutoplayTick, now);
        assert_eq!(ctrl.pending_timers(), 1);

        assert_eq!(ctrl.tick(), 0);
        assert_eq!(ctrl.snapshot(), before);
        assert_eq!(ctrl.pending_timers(), 0);
    }

    #[test]
    fn empty_quiz_is_rejected_up_front() {
        let mut content = LessonContent::bundled();
        content.quiz.clear();
        let err = LessonController::new(Arc::new(content), LessonSettings::default(), fixed_clock())
            .unwrap_err();
        assert!(matches!(err, LessonError::Quiz(QuizError::Empty)));
    }

    #[test]
    fn degenerate_intro_number_is_rejected_up_front() {
        let mut content = LessonContent::bundled();
        content.intro_prime = NumberFact::new(1, true, vec![1]);
        let err = LessonController::new(Arc::new(content), LessonSettings::default(), fixed_clock())
            .unwrap_err();
        assert!(matches!(
            err,
            LessonError::Divisor(DivisorError::Degenerate { number: 1 })
        ));
    }

    #[test]
    fn finished_quiz_reports_score_on_reset() {
        let mut content = LessonContent::bundled();
        content.quiz = vec![QuizItem::new(7, true)];
        let mut ctrl =
            LessonController::new(Arc::new(content), LessonSettings::default(), fixed_clock())
                .unwrap();
        go_to(&mut ctrl, LessonPhase::Quiz);
        ctrl.submit_answer(true).unwrap();
        ctrl.advance_time(Duration::milliseconds(1500));

        let report = ctrl.reset();
        assert_eq!(
            report.final_score,
            Some(FinalScore {
                correct: 1,
                total: 1
            })
        );
    }
}
