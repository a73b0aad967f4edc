mod content;
mod ids;
mod number;
mod phase;

pub use content::{ComparisonCard, LessonContent};
pub use ids::{SlideId, TimerId};
pub use number::{ContentError, NumberFact, QuizItem, check_kind};
pub use phase::LessonPhase;
