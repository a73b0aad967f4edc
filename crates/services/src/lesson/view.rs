use lesson_core::model::{LessonPhase, SlideId};
use lesson_core::visualizer::VisualizerSnapshot;

use crate::quiz_engine::QuizSnapshot;

/// Everything the presentation layer needs to draw the current slide.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSnapshot {
    pub phase: LessonPhase,
    pub slide: SlideId,
    pub visualizer: Option<VisualizerSnapshot>,
    pub quiz: Option<QuizSnapshot>,
}
