//! Campaign configuration wizard for ScreenBook.
//!
//! A six-step state machine that owns one campaign draft per session,
//! validates each step's exit conditions, and hands the finished draft plus
//! its computed pricing to a submission adapter.

pub mod controller;
pub mod submission;
pub mod validation;

pub use controller::{WizardController, WizardStep};
pub use submission::{MockSubmissionAdapter, SubmissionAdapter};
pub use validation::ValidationErrors;
