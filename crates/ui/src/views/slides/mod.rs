mod comparison;
mod gallery;
mod intro;
mod quiz;
mod welcome;

pub use comparison::ComparisonSlide;
pub use gallery::GallerySlide;
pub use intro::IntroSlide;
pub use quiz::QuizSlide;
pub use welcome::{RestartBar, WelcomeSlide};
