//! Question generation for Practice mode
//!
//! Draws operand pairs from an injectable random source so that the
//! generator is deterministic under a fixed seed.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::fmt;

/// Smallest first operand (the table being quizzed)
pub const OPERAND_A_MIN: u32 = 2;
/// Number of distinct first operands, 2 through 9
pub const OPERAND_A_SPAN: u32 = 8;
/// Smallest second operand (the multiplier)
pub const OPERAND_B_MIN: u32 = 1;
/// Number of distinct second operands, 1 through 10
pub const OPERAND_B_SPAN: u32 = 10;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. `bound` is never zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

/// Random source backed by a `SmallRng`
#[derive(Debug, Clone)]
pub struct SmallRngSource {
    rng: SmallRng,
}

impl SmallRngSource {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed from `seed` when given, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed deterministically, for reproducible sessions and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SmallRngSource {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}

/// A practice question: `operand_a × operand_b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub operand_a: u32,
    pub operand_b: u32,
}

impl Question {
    pub fn new(operand_a: u32, operand_b: u32) -> Self {
        Self {
            operand_a,
            operand_b,
        }
    }

    /// The expected answer
    pub fn product(&self) -> u32 {
        self.operand_a * self.operand_b
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = ?", self.operand_a, self.operand_b)
    }
}

/// Produces questions with `operand_a` in [2,9] and `operand_b` in [1,10]
#[derive(Debug)]
pub struct QuestionGenerator<R> {
    source: R,
}

impl<R: RandomSource> QuestionGenerator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Draw a fresh question, consuming entropy from the source
    pub fn generate(&mut self) -> Question {
        let operand_a = OPERAND_A_MIN + self.source.next_int(OPERAND_A_SPAN);
        let operand_b = OPERAND_B_MIN + self.source.next_int(OPERAND_B_SPAN);
        Question {
            operand_a,
            operand_b,
        }
    }
}
