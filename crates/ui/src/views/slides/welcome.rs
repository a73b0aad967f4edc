use dioxus::prelude::*;

use crate::views::LessonHandle;
use crate::views::components::NumberCharacter;
use crate::vm::{CharacterSize, CharacterStyle, Emotion, copy};

#[component]
pub fn WelcomeSlide(prime: u32, composite: u32) -> Element {
    let handle = use_context::<LessonHandle>();
    rsx! {
        section { class: "slide welcome-slide",
            h1 { class: "view-title", {copy::APP_TITLE} }
            p { class: "view-subtitle",
                {copy::WELCOME_TAGLINE_PREFIX}
                span { class: "label-prime", {copy::PRIME_LABEL} }
                {copy::WELCOME_TAGLINE_JOIN}
                span { class: "label-composite", {copy::COMPOSITE_LABEL} }
                {copy::WELCOME_TAGLINE_SUFFIX}
            }
            div { class: "character-row",
                NumberCharacter {
                    value: prime,
                    style: CharacterStyle::Prime,
                    size: CharacterSize::Large,
                    emotion: Emotion::Proud,
                }
                NumberCharacter {
                    value: composite,
                    style: CharacterStyle::Composite,
                    size: CharacterSize::Large,
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| handle.advance(),
                {copy::START_BUTTON}
            }
        }
    }
}

/// Small header shown on every slide after the welcome screen.
#[component]
pub fn RestartBar() -> Element {
    let handle = use_context::<LessonHandle>();
    rsx! {
        header { class: "restart-bar",
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| handle.reset(),
                {copy::RESTART_LABEL}
            }
        }
    }
}
