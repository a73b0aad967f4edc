use std::time::Duration as StdDuration;

use dioxus::prelude::*;
use lesson_core::model::LessonPhase;
use services::{LessonController, LessonSnapshot};

use crate::context::AppContext;
use crate::views::slides::{
    ComparisonSlide, GallerySlide, IntroSlide, QuizSlide, RestartBar, WelcomeSlide,
};
use crate::vm::{background_class, copy};

/// Longest the timer pump sleeps before re-reading the next deadline.
const MAX_PUMP_SLEEP: StdDuration = StdDuration::from_millis(100);

/// Shared handle to the running lesson. Slides call into it on clicks.
#[derive(Clone, Copy, PartialEq)]
pub struct LessonHandle {
    inner: Signal<Result<LessonController, String>>,
}

impl LessonHandle {
    #[must_use]
    pub fn snapshot(&self) -> Option<LessonSnapshot> {
        self.inner.read().as_ref().ok().map(LessonController::snapshot)
    }

    /// Why the lesson could not be built, if it could not.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.read().as_ref().err().cloned()
    }

    #[must_use]
    pub fn max_selectable_columns(&self) -> u32 {
        self.inner
            .read()
            .as_ref()
            .map_or(0, |lesson| lesson.settings().max_selectable_columns())
    }

    pub fn advance(&self) {
        self.with_lesson(|lesson| {
            if let Err(err) = lesson.advance() {
                tracing::warn!(error = %err, "advance rejected");
            }
        });
    }

    pub fn reset(&self) {
        self.with_lesson(|lesson| {
            let report = lesson.reset();
            if let Some(score) = report.final_score {
                tracing::info!(correct = score.correct, total = score.total, "lesson restarted after quiz");
            }
        });
    }

    pub fn set_columns(&self, columns: u32) {
        self.with_lesson(|lesson| {
            if let Err(err) = lesson.set_columns(columns) {
                tracing::warn!(columns, error = %err, "column choice rejected");
            }
        });
    }

    pub fn set_autoplay(&self, enabled: bool) {
        self.with_lesson(|lesson| {
            if let Err(err) = lesson.set_autoplay(enabled) {
                tracing::warn!(enabled, error = %err, "autoplay toggle rejected");
            }
        });
    }

    pub fn submit_answer(&self, claim_is_prime: bool) {
        self.with_lesson(|lesson| {
            if let Err(err) = lesson.submit_answer(claim_is_prime) {
                tracing::warn!(error = %err, "answer rejected");
            }
        });
    }

    /// Fire due timers. Only takes a write borrow when something is due, so
    /// idle polling does not re-render.
    fn pump(&self) -> StdDuration {
        let (due, wait) = match self.inner.read().as_ref() {
            Ok(lesson) => match lesson.next_deadline() {
                Some(deadline) => {
                    let left = deadline - lesson.now();
                    let wait = left.to_std().unwrap_or(StdDuration::ZERO);
                    (left <= chrono::Duration::zero(), wait.min(MAX_PUMP_SLEEP))
                }
                None => (false, MAX_PUMP_SLEEP),
            },
            Err(_) => (false, MAX_PUMP_SLEEP),
        };
        if due {
            self.with_lesson(|lesson| {
                lesson.tick();
            });
        }
        wait
    }

    pub(crate) fn with_lesson(&self, f: impl FnOnce(&mut LessonController)) {
        let mut inner = self.inner;
        let mut guard = inner.write();
        match guard.as_mut() {
            Ok(lesson) => f(lesson),
            Err(message) => tracing::warn!(%message, "input ignored, lesson unavailable"),
        }
    }
}

/// Build the lesson controller, share its handle through context and start
/// the timer pump.
pub fn use_lesson_handle() -> LessonHandle {
    let ctx = use_context::<AppContext>();
    let inner = use_signal(move || ctx.build_controller().map_err(|err| err.to_string()));
    let handle = use_context_provider(|| LessonHandle { inner });

    use_future(move || async move {
        loop {
            let wait = handle.pump();
            tokio::time::sleep(wait).await;
        }
    });

    handle
}

#[component]
pub fn LessonView() -> Element {
    use_lesson_handle();
    rsx! { LessonStage {} }
}

/// Renders whatever slide the lesson in context is on.
#[component]
pub fn LessonStage() -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_context::<LessonHandle>();

    let Some(snapshot) = handle.snapshot() else {
        let message = handle.error().unwrap_or_default();
        return rsx! {
            div { class: "page bg-plain",
                h2 { class: "view-title", {copy::LESSON_UNAVAILABLE} }
                pre { class: "fatal", "{message}" }
            }
        };
    };

    let content = ctx.content();
    let slide = match snapshot.phase {
        LessonPhase::Welcome => rsx! {
            WelcomeSlide {
                prime: content.intro_prime.value,
                composite: content.intro_composite.value,
            }
        },
        LessonPhase::IntroPrime2 => rsx! {
            IntroSlide { fact: content.intro_prime.clone(), visualizer: snapshot.visualizer }
        },
        LessonPhase::IntroPrimesOthers => rsx! {
            GallerySlide { prime: true, numbers: content.other_primes.clone() }
        },
        LessonPhase::IntroComposite4 => rsx! {
            IntroSlide { fact: content.intro_composite.clone(), visualizer: snapshot.visualizer }
        },
        LessonPhase::IntroCompositesOthers => rsx! {
            GallerySlide { prime: false, numbers: content.other_composites.clone() }
        },
        LessonPhase::Comparison => rsx! {
            ComparisonSlide {
                prime: content.comparison_prime.clone(),
                composite: content.comparison_composite.clone(),
            }
        },
        LessonPhase::Quiz => match snapshot.quiz {
            Some(quiz) => rsx! { QuizSlide { quiz } },
            None => rsx! {},
        },
    };

    let page_class = background_class(snapshot.phase);
    let phase_name = snapshot.phase.as_str();
    rsx! {
        div { class: "{page_class}", "data-phase": "{phase_name}",
            if snapshot.phase != LessonPhase::Welcome {
                RestartBar {}
            }
            {slide}
        }
    }
}
