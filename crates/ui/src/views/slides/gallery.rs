use dioxus::prelude::*;

use crate::views::LessonHandle;
use crate::views::components::NumberCharacter;
use crate::vm::{CharacterStyle, copy};

#[component]
pub fn GallerySlide(prime: bool, numbers: Vec<u32>) -> Element {
    let handle = use_context::<LessonHandle>();
    let (title, body, style, next) = if prime {
        (copy::PRIMES_TITLE, copy::PRIMES_BODY, CharacterStyle::Prime, copy::PRIMES_NEXT)
    } else {
        (
            copy::COMPOSITES_TITLE,
            copy::COMPOSITES_BODY,
            CharacterStyle::Composite,
            copy::COMPOSITES_NEXT,
        )
    };

    rsx! {
        section { class: "slide gallery-slide",
            h2 { class: "view-title", "{title}" }
            p { class: "view-subtitle", "{body}" }
            div { class: "character-row",
                for value in numbers.iter().copied() {
                    NumberCharacter { key: "{value}", value, style }
                }
            }
            if prime {
                p { class: "gallery-note", {copy::PRIMES_NOTE} }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| handle.advance(),
                "{next}"
            }
        }
    }
}
