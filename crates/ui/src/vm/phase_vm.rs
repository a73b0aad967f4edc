use lesson_core::model::LessonPhase;

/// Page background for each slide: prime slides warm, composite slides cool.
#[must_use]
pub fn background_class(phase: LessonPhase) -> &'static str {
    match phase {
        LessonPhase::Welcome => "page bg-welcome",
        LessonPhase::IntroPrime2 | LessonPhase::IntroPrimesOthers => "page bg-prime",
        LessonPhase::IntroComposite4 | LessonPhase::IntroCompositesOthers => "page bg-composite",
        LessonPhase::Comparison => "page bg-plain",
        LessonPhase::Quiz => "page bg-quiz",
    }
}
