use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::number::{ContentError, NumberFact, QuizItem, check_kind};
use crate::primality::NumberKind;

/// One side of the comparison slide: a showcase number and a few examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCard {
    pub showcase: u32,
    pub examples: Vec<u32>,
}

/// All static data the lesson needs, supplied once at startup.
///
/// The bundled copy comes from `catalog`; a JSON file with the same shape can
/// replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub intro_prime: NumberFact,
    pub intro_composite: NumberFact,
    pub other_primes: Vec<u32>,
    pub other_composites: Vec<u32>,
    pub comparison_prime: ComparisonCard,
    pub comparison_composite: ComparisonCard,
    pub quiz: Vec<QuizItem>,
}

impl LessonContent {
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            intro_prime: catalog::intro_prime(),
            intro_composite: catalog::intro_composite(),
            other_primes: catalog::OTHER_PRIMES.to_vec(),
            other_composites: catalog::OTHER_COMPOSITES.to_vec(),
            comparison_prime: ComparisonCard {
                showcase: catalog::COMPARISON_PRIME,
                examples: catalog::COMPARISON_PRIME_EXAMPLES.to_vec(),
            },
            comparison_composite: ComparisonCard {
                showcase: catalog::COMPARISON_COMPOSITE,
                examples: catalog::COMPARISON_COMPOSITE_EXAMPLES.to_vec(),
            },
            quiz: catalog::QUIZ_ITEMS.to_vec(),
        }
    }

    /// Check every entry by trial division and collect all mistakes.
    #[must_use]
    pub fn problems(&self) -> Vec<ContentError> {
        let mut problems = Vec::new();

        for fact in [&self.intro_prime, &self.intro_composite] {
            if let Err(err) = fact.validate() {
                problems.push(err);
            }
        }
        if !self.intro_prime.is_prime {
            problems.push(ContentError::MisplacedFact {
                slot: "intro_prime",
                value: self.intro_prime.value,
            });
        }
        if self.intro_composite.is_prime {
            problems.push(ContentError::MisplacedFact {
                slot: "intro_composite",
                value: self.intro_composite.value,
            });
        }

        let primes = self
            .other_primes
            .iter()
            .chain(std::iter::once(&self.comparison_prime.showcase))
            .chain(&self.comparison_prime.examples);
        for value in primes {
            if let Err(err) = check_kind(*value, NumberKind::Prime) {
                problems.push(err);
            }
        }

        let composites = self
            .other_composites
            .iter()
            .chain(std::iter::once(&self.comparison_composite.showcase))
            .chain(&self.comparison_composite.examples);
        for value in composites {
            if let Err(err) = check_kind(*value, NumberKind::Composite) {
                problems.push(err);
            }
        }

        if self.quiz.is_empty() {
            problems.push(ContentError::EmptyQuiz);
        }
        for (index, item) in self.quiz.iter().enumerate() {
            if let Err(err) = item.validate() {
                problems.push(ContentError::QuizItem {
                    index,
                    number: item.number,
                    source: Box::new(err),
                });
            }
        }

        problems
    }

    /// # Errors
    ///
    /// Returns the first problem reported by `problems`.
    pub fn validate(&self) -> Result<(), ContentError> {
        match self.problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for LessonContent {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_is_valid() {
        let content = LessonContent::bundled();
        assert!(content.problems().is_empty(), "{:?}", content.problems());
        assert_eq!(content.quiz.len(), 8);
    }

    #[test]
    fn mislabelled_quiz_item_is_reported_with_index() {
        let mut content = LessonContent::bundled();
        content.quiz[2] = QuizItem::new(15, true);
        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::QuizItem {
                index: 2,
                number: 15,
                ..
            }
        ));
    }

    #[test]
    fn prime_in_composite_list_is_reported() {
        let mut content = LessonContent::bundled();
        content.other_composites.push(7);
        let problems = content.problems();
        assert_eq!(problems.len(), 1);
        assert!(matches!(problems[0], ContentError::WrongKind { value: 7, .. }));
    }

    #[test]
    fn composite_in_prime_slot_is_reported() {
        let mut content = LessonContent::bundled();
        content.intro_prime = NumberFact::new(4, false, vec![1, 2, 4]);
        assert_eq!(
            content.validate(),
            Err(ContentError::MisplacedFact {
                slot: "intro_prime",
                value: 4,
            })
        );
    }

    #[test]
    fn empty_quiz_is_reported() {
        let mut content = LessonContent::bundled();
        content.quiz.clear();
        assert_eq!(content.validate(), Err(ContentError::EmptyQuiz));
    }

    #[test]
    fn json_shape_matches_bundled() {
        let content = LessonContent::bundled();
        let json = serde_json::to_string(&content).unwrap();
        let parsed: LessonContent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, content);
    }
}
