//! Bundled lesson data. Entered by hand; see `LessonContent::validate`.

use crate::model::{NumberFact, QuizItem};

pub const OTHER_PRIMES: [u32; 4] = [3, 5, 7, 11];
pub const OTHER_COMPOSITES: [u32; 4] = [6, 8, 9, 10];

pub const COMPARISON_PRIME: u32 = 5;
pub const COMPARISON_PRIME_EXAMPLES: [u32; 5] = [2, 3, 5, 7, 11];
pub const COMPARISON_COMPOSITE: u32 = 6;
pub const COMPARISON_COMPOSITE_EXAMPLES: [u32; 5] = [4, 6, 8, 9, 10];

pub const QUIZ_ITEMS: [QuizItem; 8] = [
    QuizItem { number: 5, is_prime: true },
    QuizItem { number: 9, is_prime: false },
    QuizItem { number: 13, is_prime: true },
    QuizItem { number: 6, is_prime: false },
    QuizItem { number: 3, is_prime: true },
    QuizItem { number: 8, is_prime: false },
    QuizItem { number: 7, is_prime: true },
    QuizItem { number: 12, is_prime: false },
];

#[must_use]
pub fn intro_prime() -> NumberFact {
    NumberFact::new(2, true, vec![1, 2])
        .with_description("我是数字 2！我是最小的素数。我只有两个朋友：1 和我自己！")
}

#[must_use]
pub fn intro_composite() -> NumberFact {
    NumberFact::new(4, false, vec![1, 2, 4])
        .with_description("我是数字 4！我是合数。我可以被 2 整除，所以我有很多朋友！")
}
