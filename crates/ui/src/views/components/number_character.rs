use dioxus::prelude::*;

use crate::vm::{CharacterSize, CharacterStyle, Emotion, map_number_character};

#[component]
pub fn NumberCharacter(
    value: u32,
    style: CharacterStyle,
    #[props(default = CharacterSize::Medium)] size: CharacterSize,
    #[props(default = Emotion::Happy)] emotion: Emotion,
) -> Element {
    let vm = map_number_character(value, style, size, emotion);
    rsx! {
        div { class: "{vm.class}",
            if vm.crown {
                span { class: "character-crown", "👑" }
            }
            span { class: "character-face",
                span { class: "character-eyes", "• •" }
                span { class: "character-value", "{vm.value}" }
            }
        }
    }
}
