mod number_character;
mod visual_divider;

pub use number_character::NumberCharacter;
pub use visual_divider::VisualDivider;
