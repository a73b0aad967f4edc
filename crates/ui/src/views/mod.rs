pub mod components;
mod lesson;
mod slides;

pub use lesson::{LessonHandle, LessonStage, LessonView, use_lesson_handle};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
