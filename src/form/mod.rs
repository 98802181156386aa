//! Form definition, answers and the sequential runner.

mod answer;
mod builder;
mod error;
mod question;
pub mod runner;

pub use answer::{Answer, FormResult};
pub use builder::{Form, FormBuilder};
pub use error::FormError;
pub use question::{InputFilter, Question, QuestionKind};
