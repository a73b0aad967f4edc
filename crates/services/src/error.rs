//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use lesson_core::divisor::DivisorError;
use lesson_core::model::{ContentError, LessonPhase};
use lesson_core::quiz::QuizError;

/// Errors emitted by `LessonSettings::validate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{name} must be greater than zero")]
    ZeroDelay { name: &'static str },
    #[error("{name} of {ms} ms exceeds the {max_ms} ms limit")]
    DelayTooLong {
        name: &'static str,
        ms: u64,
        max_ms: u64,
    },
    #[error("at least one column must be selectable")]
    NoColumns,
}

/// Errors emitted while loading a settings file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SettingsError),
}

/// Errors emitted while loading lesson content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("lesson content has {} problem(s)", .problems.len())]
    Invalid { problems: Vec<ContentError> },
}

/// Errors emitted by `LessonController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error("the {phase} slide has no divisor visualizer")]
    NoVisualizer { phase: LessonPhase },
    #[error("the {phase} slide is not the quiz")]
    NotInQuiz { phase: LessonPhase },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Divisor(#[from] DivisorError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
