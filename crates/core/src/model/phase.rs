use std::fmt;

//
// ─── LESSON PHASE ─────────────────────────────────────────────────────────────
//

/// The slides of the lesson, in the order they are shown.
///
/// `Quiz` is the last slide; only a reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LessonPhase {
    #[default]
    Welcome,
    IntroPrime2,
    IntroPrimesOthers,
    IntroComposite4,
    IntroCompositesOthers,
    Comparison,
    Quiz,
}

impl LessonPhase {
    /// Every phase in presentation order.
    pub const ALL: [LessonPhase; 7] = [
        LessonPhase::Welcome,
        LessonPhase::IntroPrime2,
        LessonPhase::IntroPrimesOthers,
        LessonPhase::IntroComposite4,
        LessonPhase::IntroCompositesOthers,
        LessonPhase::Comparison,
        LessonPhase::Quiz,
    ];

    /// The phase that follows this one, or `None` for `Quiz`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            LessonPhase::Welcome => Some(LessonPhase::IntroPrime2),
            LessonPhase::IntroPrime2 => Some(LessonPhase::IntroPrimesOthers),
            LessonPhase::IntroPrimesOthers => Some(LessonPhase::IntroComposite4),
            LessonPhase::IntroComposite4 => Some(LessonPhase::IntroCompositesOthers),
            LessonPhase::IntroCompositesOthers => Some(LessonPhase::Comparison),
            LessonPhase::Comparison => Some(LessonPhase::Quiz),
            LessonPhase::Quiz => None,
        }
    }

    /// Zero-based position in the lesson.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Stable machine-readable name, used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonPhase::Welcome => "welcome",
            LessonPhase::IntroPrime2 => "intro_prime_2",
            LessonPhase::IntroPrimesOthers => "intro_primes_others",
            LessonPhase::IntroComposite4 => "intro_composite_4",
            LessonPhase::IntroCompositesOthers => "intro_composites_others",
            LessonPhase::Comparison => "comparison",
            LessonPhase::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
