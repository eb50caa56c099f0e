//! Practice quiz logic
//!
//! Question generation, answer evaluation, and the per-screen practice
//! session built on top of them.

pub mod evaluate;
pub mod question;
pub mod session;

pub use evaluate::{evaluate, sanitize, Evaluation, PendingReason};
pub use question::{Question, QuestionGenerator, RandomSource, SmallRngSource};
pub use session::{AttemptState, Outcome, PracticeSession};
