//! Answer evaluation
//!
//! Typed answers are sanitized down to their digits before being compared
//! with the product. Nothing here fails: input without digits is simply
//! not ready to be checked.

use super::question::Question;
use std::fmt;

/// Result of evaluating a typed answer against a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The answer equals the product
    Correct,
    /// The answer differs from the product
    Incorrect { expected: u32 },
    /// Not ready to be checked; the caller must not change state
    Pending(PendingReason),
}

/// Why an answer could not be checked yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingReason {
    /// Nothing numeric remained after sanitizing
    NoDigits,
}

impl fmt::Display for PendingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingReason::NoDigits => write!(f, "non-numeric or empty"),
        }
    }
}

/// Remove every character that is not an ASCII digit
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Compare `raw` with the product of `question`
pub fn evaluate(raw: &str, question: &Question) -> Evaluation {
    let digits = sanitize(raw);
    if digits.is_empty() {
        return Evaluation::Pending(PendingReason::NoDigits);
    }

    let expected = question.product();
    // Overflowing digit strings are still numbers, just never the product
    match digits.parse::<u64>() {
        Ok(value) if value == u64::from(expected) => Evaluation::Correct,
        _ => Evaluation::Incorrect { expected },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn six_by_seven() -> Question {
        Question::new(6, 7)
    }

    #[test]
    fn test_correct_answer() {
        assert_eq!(evaluate("42", &six_by_seven()), Evaluation::Correct);
    }

    #[test]
    fn test_incorrect_answer_reports_expected() {
        assert_eq!(
            evaluate("40", &six_by_seven()),
            Evaluation::Incorrect { expected: 42 }
        );
    }

    #[test]
    fn test_empty_and_garbage_are_pending() {
        assert_eq!(evaluate("", &six_by_seven()), Evaluation::Pending(PendingReason::NoDigits));
        assert_eq!(evaluate("abc", &six_by_seven()), Evaluation::Pending(PendingReason::NoDigits));
        assert_eq!(evaluate(" - ", &six_by_seven()), Evaluation::Pending(PendingReason::NoDigits));
        assert_eq!(PendingReason::NoDigits.to_string(), "non-numeric or empty");
    }

    #[test]
    fn test_mixed_input_is_sanitized() {
        let q = Question::new(3, 4);
        assert_eq!(evaluate("12x", &q), evaluate("12", &q));
        assert_eq!(evaluate("1a2", &q), Evaluation::Correct);
        assert_eq!(sanitize("-4.2e1"), "421");
    }

    #[test]
    fn test_leading_zeros_parse() {
        assert_eq!(evaluate("0042", &six_by_seven()), Evaluation::Correct);
    }

    #[test]
    fn test_huge_number_is_incorrect() {
        assert_eq!(
            evaluate("123456789012345678901234567890", &six_by_seven()),
            Evaluation::Incorrect { expected: 42 }
        );
    }

    proptest! {
        #[test]
        fn prop_correct_iff_product(a in 2u32..=9, b in 1u32..=10, v in 0u32..200) {
            let q = Question::new(a, b);
            let result = evaluate(&v.to_string(), &q);
            if v == a * b {
                prop_assert_eq!(result, Evaluation::Correct);
            } else {
                prop_assert_eq!(result, Evaluation::Incorrect { expected: a * b });
            }
        }

        #[test]
        fn prop_letters_never_check(a in 2u32..=9, b in 1u32..=10, s in "[a-zA-Z ]*") {
            prop_assert_eq!(evaluate(&s, &Question::new(a, b)), Evaluation::Pending(PendingReason::NoDigits));
        }
    }
}
