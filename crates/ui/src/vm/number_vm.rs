use lesson_core::primality::NumberKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl CharacterSize {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            CharacterSize::Small => "size-sm",
            CharacterSize::Medium => "size-md",
            CharacterSize::Large => "size-lg",
            CharacterSize::ExtraLarge => "size-xl",
        }
    }
}

/// How a number character is coloured. `Mystery` is neutral and is the only
/// style the quiz uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterStyle {
    Prime,
    Composite,
    Mystery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Surprised,
    Proud,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberCharacterVm {
    pub value: u32,
    pub class: String,
    pub crown: bool,
}

#[must_use]
pub fn map_number_character(
    value: u32,
    style: CharacterStyle,
    size: CharacterSize,
    emotion: Emotion,
) -> NumberCharacterVm {
    let style_class = match style {
        CharacterStyle::Prime => "character-prime",
        CharacterStyle::Composite => "character-composite",
        CharacterStyle::Mystery => "character-mystery",
    };
    let emotion_class = match emotion {
        Emotion::Happy => "mood-happy",
        Emotion::Surprised => "mood-surprised",
        Emotion::Proud => "mood-proud",
    };
    NumberCharacterVm {
        value,
        class: format!("character {style_class} {} {emotion_class}", size.class()),
        crown: style == CharacterStyle::Prime,
    }
}

impl From<NumberKind> for CharacterStyle {
    fn from(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Prime => CharacterStyle::Prime,
            NumberKind::Composite => CharacterStyle::Composite,
        }
    }
}
