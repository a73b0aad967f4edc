use dioxus::prelude::*;
use lesson_core::model::NumberFact;
use lesson_core::primality::NumberKind;
use lesson_core::visualizer::VisualizerSnapshot;

use crate::views::LessonHandle;
use crate::views::components::{NumberCharacter, VisualDivider};
use crate::vm::{CharacterSize, CharacterStyle, Emotion, copy};

/// Introduces one number with an animated divisor grid.
#[component]
pub fn IntroSlide(fact: NumberFact, #[props(!optional)] visualizer: Option<VisualizerSnapshot>) -> Element {
    let handle = use_context::<LessonHandle>();
    let kind = fact.kind();
    let (badge, body, note, next) = match kind {
        NumberKind::Prime => (
            copy::INTRO_PRIME_BADGE,
            copy::INTRO_PRIME_BODY,
            copy::INTRO_PRIME_NOTE,
            copy::INTRO_PRIME_NEXT,
        ),
        NumberKind::Composite => (
            copy::INTRO_COMPOSITE_BADGE,
            copy::INTRO_COMPOSITE_BODY,
            copy::INTRO_COMPOSITE_NOTE,
            copy::INTRO_COMPOSITE_NEXT,
        ),
    };
    let title = copy::intro_title(fact.value);
    let factors = fact
        .factors
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let factors_line = format!("{}: {factors}", copy::kind_label(kind));
    let friends: Vec<u32> = fact
        .factors
        .iter()
        .copied()
        .filter(|&f| f != 1 && f != fact.value)
        .collect();
    let friends_line = match kind {
        NumberKind::Composite => copy::composite_friends_line(fact.value, &friends),
        NumberKind::Prime => None,
    };

    rsx! {
        section { class: "slide intro-slide",
            span { class: "badge", "{badge}" }
            h2 { class: "view-title", "{title}" }
            div { class: "intro-hero",
                NumberCharacter {
                    value: fact.value,
                    style: CharacterStyle::from(kind),
                    size: CharacterSize::ExtraLarge,
                    emotion: Emotion::Surprised,
                }
                div { class: "intro-text",
                    if let Some(description) = fact.description.as_ref() {
                        p { class: "speech", "{description}" }
                    }
                    p { "{body}" }
                    p { class: "intro-factors", "{factors_line}" }
                }
            }
            if let Some(snapshot) = visualizer {
                VisualDivider { snapshot }
            }
            if let Some(line) = friends_line {
                p { class: "intro-note", "{line}" }
            }
            p { class: "intro-note", "{note}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| handle.advance(),
                "{next}"
            }
        }
    }
}
