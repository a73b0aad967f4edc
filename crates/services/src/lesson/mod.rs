mod controller;
mod slide;
mod view;

// Public API of the lesson subsystem.
pub use crate::error::LessonError;
pub use controller::{LessonController, ResetReport};
pub use view::LessonSnapshot;
