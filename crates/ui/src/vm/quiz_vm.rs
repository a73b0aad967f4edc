use lesson_core::quiz::AnswerOutcome;
use services::QuizSnapshot;

use super::copy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackVm {
    Correct,
    Incorrect,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            FeedbackVm::Correct => "feedback correct",
            FeedbackVm::Incorrect => "feedback incorrect",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            FeedbackVm::Correct => "✔",
            FeedbackVm::Incorrect => "✘",
        }
    }
}

/// The question card. Holds the number and nothing that hints at the answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: u32,
    pub progress_percent: u32,
    pub feedback: Option<FeedbackVm>,
    pub answers_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_line: String,
    pub cheer: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuestionVm),
    Finished(QuizResultVm),
}

#[must_use]
pub fn map_quiz(snapshot: &QuizSnapshot) -> QuizVm {
    if let Some(score) = snapshot.final_score {
        return QuizVm::Finished(QuizResultVm {
            score_line: copy::score_line(score.correct, score.total),
            cheer: if score.is_perfect() {
                copy::QUIZ_PERFECT
            } else {
                copy::QUIZ_KEEP_GOING
            },
        });
    }

    let feedback = snapshot.pending_feedback.map(|outcome| match outcome {
        AnswerOutcome::Correct => FeedbackVm::Correct,
        AnswerOutcome::Incorrect => FeedbackVm::Incorrect,
    });
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (snapshot.progress * 100.0).round().clamp(0.0, 100.0) as u32;

    QuizVm::Question(QuestionVm {
        number: snapshot.question.map_or(0, |q| q.number),
        progress_percent,
        feedback,
        answers_enabled: feedback.is_none(),
    })
}
