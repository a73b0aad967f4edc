use std::sync::Arc;

use lesson_core::model::LessonContent;
use services::{Clock, LessonController, LessonError, LessonSettings};

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<LessonContent>;
    fn settings(&self) -> LessonSettings;

    /// Clock handed to every new controller. Desktop uses the system clock.
    fn clock(&self) -> Clock {
        Clock::system()
    }
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<LessonContent>,
    settings: LessonSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn settings(&self) -> LessonSettings {
        self.settings
    }

    /// A fresh controller on the welcome slide.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the configured content or settings are unusable.
    pub fn build_controller(&self) -> Result<LessonController, LessonError> {
        LessonController::new(self.content(), self.settings, self.clock)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
