use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use lesson_core::time::millis;
use lesson_core::visualizer::MAX_SELECTABLE_COLUMNS;

use crate::error::{SettingsError, SettingsLoadError};

const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1_500;
const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 2_500;
const MAX_DELAY_MS: u64 = 60 * 60 * 1_000;

/// Timing and layout knobs for a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonSettings {
    feedback_delay_ms: u64,
    autoplay_interval_ms: u64,
    max_selectable_columns: u32,
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            max_selectable_columns: MAX_SELECTABLE_COLUMNS,
        }
    }
}

impl LessonSettings {
    #[must_use]
    pub fn with_feedback_delay_ms(mut self, ms: u64) -> Self {
        self.feedback_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = ms;
        self
    }

    #[must_use]
    pub fn with_max_selectable_columns(mut self, columns: u32) -> Self {
        self.max_selectable_columns = columns;
        self
    }

    /// How long quiz feedback stays on screen.
    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        millis(self.feedback_delay_ms)
    }

    /// Time between autoplay steps.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        millis(self.autoplay_interval_ms)
    }

    #[must_use]
    pub fn max_selectable_columns(&self) -> u32 {
        self.max_selectable_columns
    }

    /// # Errors
    ///
    /// Returns `SettingsError` for zero or over-long delays and for zero columns.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, ms) in [
            ("feedback_delay_ms", self.feedback_delay_ms),
            ("autoplay_interval_ms", self.autoplay_interval_ms),
        ] {
            check_delay_ms(name, ms)?;
        }
        if self.max_selectable_columns == 0 {
            return Err(SettingsError::NoColumns);
        }
        Ok(())
    }
}

/// Parse settings JSON. Missing keys keep their defaults.
///
/// # Errors
///
/// Returns `SettingsLoadError::Json` for malformed input and
/// `SettingsLoadError::Invalid` when the values fail `validate`.
pub fn parse_settings(json: &str) -> Result<LessonSettings, SettingsLoadError> {
    let settings: LessonSettings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
}

/// # Errors
///
/// Returns `SettingsLoadError::Io` if the file cannot be read, otherwise the
/// errors of `parse_settings`.
pub fn load_settings_file(path: &Path) -> Result<LessonSettings, SettingsLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&raw)?;
    tracing::info!(path = %path.display(), ?settings, "loaded lesson settings");
    Ok(settings)
}

/// Bounds check for a delay handed straight to a timer owner.
///
/// # Errors
///
/// Same as `LessonSettings::validate`; negative delays count as zero.
pub fn check_delay(name: &'static str, delay: Duration) -> Result<(), SettingsError> {
    let ms = u64::try_from(delay.num_milliseconds()).unwrap_or(0);
    check_delay_ms(name, ms)
}

fn check_delay_ms(name: &'static str, ms: u64) -> Result<(), SettingsError> {
    if ms == 0 {
        return Err(SettingsError::ZeroDelay { name });
    }
    if ms > MAX_DELAY_MS {
        return Err(SettingsError::DelayTooLong {
            name,
            ms,
            max_ms: MAX_DELAY_MS,
        });
    }
    Ok(())
}
