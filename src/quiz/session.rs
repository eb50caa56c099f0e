//! Practice session state machine
//!
//! A session holds the current question and the learner's attempt. Once an
//! attempt has been checked its input is locked until the next question.

use super::evaluate::{evaluate, Evaluation};
use super::question::{Question, QuestionGenerator, RandomSource};
use tracing::debug;

/// Outcome of a checked attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { expected: u32 },
}

impl Outcome {
    /// Feedback line shown beneath the input
    pub fn message(&self) -> String {
        match self {
            Outcome::Correct => "Correct!!".to_string(),
            Outcome::Incorrect { expected } => format!("Incorrect. It's {}", expected),
        }
    }
}

/// State of the learner's answer for the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptState {
    /// Still typing; input is editable
    Unanswered { input: String },
    /// Checked; input is frozen alongside the outcome
    Checked { input: String, outcome: Outcome },
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::Unanswered {
            input: String::new(),
        }
    }
}

/// Screen-local state of Practice mode
#[derive(Debug, Clone)]
pub struct PracticeSession {
    question: Question,
    attempt: AttemptState,
}

impl PracticeSession {
    /// Start a session with a freshly generated question
    pub fn start<R: RandomSource>(generator: &mut QuestionGenerator<R>) -> Self {
        Self::with_question(generator.generate())
    }

    /// Start a session on a known question
    pub fn with_question(question: Question) -> Self {
        Self {
            question,
            attempt: AttemptState::default(),
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    /// Text currently in the input field
    pub fn input(&self) -> &str {
        match &self.attempt {
            AttemptState::Unanswered { input } | AttemptState::Checked { input, .. } => input,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.attempt {
            AttemptState::Checked { outcome, .. } => Some(*outcome),
            AttemptState::Unanswered { .. } => None,
        }
    }

    /// Whether the input is frozen until the next question
    pub fn is_locked(&self) -> bool {
        matches!(self.attempt, AttemptState::Checked { .. })
    }

    /// Append a typed character; non-digits are dropped
    pub fn push_digit(&mut self, c: char) {
        if let AttemptState::Unanswered { input } = &mut self.attempt {
            if c.is_ascii_digit() {
                input.push(c);
            }
        }
    }

    /// Append pasted text, keeping only its digits
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.push_digit(c);
        }
    }

    pub fn backspace(&mut self) {
        if let AttemptState::Unanswered { input } = &mut self.attempt {
            input.pop();
        }
    }

    /// Evaluate the current input.
    ///
    /// `Pending` leaves the session untouched. Checking an already checked
    /// attempt returns its stored outcome again.
    pub fn check(&mut self) -> Evaluation {
        if let AttemptState::Checked { outcome, .. } = &self.attempt {
            return Evaluation::from(*outcome);
        }

        let evaluation = evaluate(self.input(), &self.question);
        let outcome = match evaluation {
            Evaluation::Correct => Outcome::Correct,
            Evaluation::Incorrect { expected } => Outcome::Incorrect { expected },
            Evaluation::Pending(_) => return evaluation,
        };

        debug!(question = %self.question, answer = self.input(), ?outcome, "Answer checked");
        let input = match std::mem::take(&mut self.attempt) {
            AttemptState::Unanswered { input } | AttemptState::Checked { input, .. } => input,
        };
        self.attempt = AttemptState::Checked { input, outcome };
        evaluation
    }

    /// Draw the next question and clear the attempt
    pub fn next<R: RandomSource>(&mut self, generator: &mut QuestionGenerator<R>) {
        self.question = generator.generate();
        self.attempt = AttemptState::default();
    }
}

impl From<Outcome> for Evaluation {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Evaluation::Correct,
            Outcome::Incorrect { expected } => Evaluation::Incorrect { expected },
        }
    }
}
