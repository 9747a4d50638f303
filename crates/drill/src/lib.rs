//! The two engines behind a vocabulary drill: macron shorthand rewriting for
//! the answer fields, and checking a submitted answer against its entry.

pub mod evaluator;
pub mod macron;

pub use evaluator::{evaluate, AnswerSubmission, Evaluation, Verdict};
pub use macron::{insert_at_cursor, transform, transform_str, Edit, EditEvent};
