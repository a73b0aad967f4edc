use chrono::{DateTime, Utc};

use lesson_core::model::{LessonContent, LessonPhase, SlideId};
use lesson_core::visualizer::{DivisorVisualizer, VisualizerMode};

use crate::error::LessonError;
use crate::quiz_engine::QuizEngine;
use crate::settings::LessonSettings;
use crate::timer::{FiredTimer, TimerQueue};
use crate::visualizer_host::VisualizerHost;

/// The interactive part of a slide, if it has one.
#[derive(Debug)]
pub(crate) enum SlideComponent {
    Static,
    Visualizer(VisualizerHost),
    Quiz(QuizEngine),
}

/// The slide on screen. Rebuilt from scratch on every phase entry.
#[derive(Debug)]
pub(crate) struct ActiveSlide {
    pub(crate) id: SlideId,
    pub(crate) phase: LessonPhase,
    pub(crate) component: SlideComponent,
}

impl ActiveSlide {
    pub(crate) fn build(
        id: SlideId,
        phase: LessonPhase,
        content: &LessonContent,
        settings: &LessonSettings,
        timers: &mut TimerQueue,
        now: DateTime<Utc>,
    ) -> Result<Self, LessonError> {
        let intro_number = match phase {
            LessonPhase::IntroPrime2 => Some(content.intro_prime.value),
            LessonPhase::IntroComposite4 => Some(content.intro_composite.value),
            _ => None,
        };

        let component = if let Some(number) = intro_number {
            let visualizer = DivisorVisualizer::new(number, VisualizerMode::Autoplay)?
                .with_max_selectable(settings.max_selectable_columns());
            SlideComponent::Visualizer(VisualizerHost::start(
                id,
                visualizer,
                settings.autoplay_interval(),
                timers,
                now,
            )?)
        } else if phase == LessonPhase::Quiz {
            SlideComponent::Quiz(QuizEngine::new(
                id,
                content.quiz.clone(),
                settings.feedback_delay(),
            )?)
        } else {
            SlideComponent::Static
        };

        Ok(Self {
            id,
            phase,
            component,
        })
    }

    pub(crate) fn static_slide(id: SlideId, phase: LessonPhase) -> Self {
        Self {
            id,
            phase,
            component: SlideComponent::Static,
        }
    }

    /// Route a fired timer to the component. Returns whether it changed state.
    pub(crate) fn on_timer(&mut self, fired: FiredTimer, timers: &mut TimerQueue) -> bool {
        match &mut self.component {
            SlideComponent::Static => false,
            SlideComponent::Visualizer(host) => host.on_timer(fired, timers).is_some(),
            SlideComponent::Quiz(quiz) => quiz.on_timer(fired).is_some(),
        }
    }

    /// Tear down: cancel everything this slide scheduled.
    pub(crate) fn dispose(&mut self, timers: &mut TimerQueue) {
        match &mut self.component {
            SlideComponent::Static => {}
            SlideComponent::Visualizer(host) => host.dispose(timers),
            SlideComponent::Quiz(quiz) => quiz.dispose(timers),
        }
        let leftover = timers.cancel_owner(self.id);
        if leftover > 0 {
            tracing::warn!(slide = %self.id, leftover, "slide left timers behind");
        }
    }
}
