use dioxus::prelude::*;
use services::QuizSnapshot;

use crate::views::LessonHandle;
use crate::views::components::NumberCharacter;
use crate::vm::{CharacterSize, CharacterStyle, Emotion, QuizVm, copy, map_quiz};

#[component]
pub fn QuizSlide(quiz: QuizSnapshot) -> Element {
    let handle = use_context::<LessonHandle>();
    match map_quiz(&quiz) {
        QuizVm::Finished(result) => rsx! {
            section { class: "slide quiz-slide quiz-done",
                div { class: "trophy", "🏆" }
                h2 { class: "view-title", {copy::QUIZ_DONE_TITLE} }
                p { class: "quiz-score", "{result.score_line}" }
                p { class: "quiz-cheer", "{result.cheer}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| handle.reset(),
                    {copy::QUIZ_RESTART}
                }
            }
        },
        QuizVm::Question(question) => {
            let disabled = !question.answers_enabled;
            let progress_style = format!("width: {}%;", question.progress_percent);
            rsx! {
                section { class: "slide quiz-slide",
                    div { class: "quiz-progress",
                        div { class: "quiz-progress-fill", style: "{progress_style}" }
                    }
                    h2 { class: "view-title", {copy::QUIZ_PROMPT} }
                    div { class: "quiz-card",
                        NumberCharacter {
                            value: question.number,
                            style: CharacterStyle::Mystery,
                            size: CharacterSize::ExtraLarge,
                            emotion: Emotion::Surprised,
                        }
                        if let Some(feedback) = question.feedback {
                            div { class: "{feedback.class()}", "{feedback.icon()}" }
                        }
                    }
                    div { class: "quiz-answers",
                        button {
                            class: "btn quiz-answer quiz-answer-prime",
                            r#type: "button",
                            disabled,
                            onclick: move |_| handle.submit_answer(true),
                            span { class: "quiz-answer-label", {copy::QUIZ_PRIME_BUTTON} }
                            span { class: "quiz-answer-hint", {copy::QUIZ_PRIME_HINT} }
                        }
                        button {
                            class: "btn quiz-answer quiz-answer-composite",
                            r#type: "button",
                            disabled,
                            onclick: move |_| handle.submit_answer(false),
                            span { class: "quiz-answer-label", {copy::QUIZ_COMPOSITE_BUTTON} }
                            span { class: "quiz-answer-hint", {copy::QUIZ_COMPOSITE_HINT} }
                        }
                    }
                }
            }
        }
    }
}
