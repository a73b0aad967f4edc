pub mod copy;
mod divider_vm;
mod number_vm;
mod phase_vm;
mod quiz_vm;

pub use divider_vm::{CellIcon, ColumnButtonVm, DividerVm, map_divider};
pub use number_vm::{CharacterSize, CharacterStyle, Emotion, NumberCharacterVm, map_number_character};
pub use phase_vm::background_class;
pub use quiz_vm::{FeedbackVm, QuestionVm, QuizResultVm, QuizVm, map_quiz};
