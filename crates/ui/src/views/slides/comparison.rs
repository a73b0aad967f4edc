use dioxus::prelude::*;
use lesson_core::model::ComparisonCard;
use lesson_core::primality::NumberKind;

use crate::views::LessonHandle;
use crate::views::components::NumberCharacter;
use crate::vm::{CharacterSize, CharacterStyle, copy};

#[component]
pub fn ComparisonSlide(prime: ComparisonCard, composite: ComparisonCard) -> Element {
    let handle = use_context::<LessonHandle>();
    rsx! {
        section { class: "slide comparison-slide",
            h2 { class: "view-title", {copy::COMPARISON_TITLE} }
            div { class: "comparison-columns",
                ComparisonColumn {
                    card: prime,
                    kind: NumberKind::Prime,
                    heading: copy::COMPARISON_PRIME_HEADING,
                    points: copy::COMPARISON_PRIME_POINTS.to_vec(),
                }
                ComparisonColumn {
                    card: composite,
                    kind: NumberKind::Composite,
                    heading: copy::COMPARISON_COMPOSITE_HEADING,
                    points: copy::COMPARISON_COMPOSITE_POINTS.to_vec(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| handle.advance(),
                {copy::COMPARISON_NEXT}
            }
        }
    }
}

#[component]
fn ComparisonColumn(
    card: ComparisonCard,
    kind: NumberKind,
    heading: &'static str,
    points: Vec<&'static str>,
) -> Element {
    let examples = copy::examples_line(kind, &card.examples);
    let style = CharacterStyle::from(kind);
    rsx! {
        div { class: "comparison-card",
            NumberCharacter { value: card.showcase, style, size: CharacterSize::Small }
            h3 { "{heading}" }
            ul {
                for point in points {
                    li { "{point}" }
                }
            }
            p { class: "comparison-examples", "{examples}" }
        }
    }
}
