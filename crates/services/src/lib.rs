#![forbid(unsafe_code)]

pub mod content_loader;
pub mod error;
pub mod lesson;
pub mod quiz_engine;
pub mod settings;
pub mod timer;
pub mod visualizer_host;

pub use lesson_core::Clock;

pub use content_loader::{check_content, load_content_file, parse_content};
pub use error::{ContentLoadError, LessonError, SettingsError, SettingsLoadError};
pub use lesson::{LessonController, LessonSnapshot, ResetReport};
pub use quiz_engine::{QuizEngine, QuizSnapshot};
pub use settings::{LessonSettings, load_settings_file, parse_settings};
pub use timer::{FiredTimer, TimerKind, TimerQueue};
pub use visualizer_host::VisualizerHost;
