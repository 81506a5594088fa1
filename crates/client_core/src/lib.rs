pub mod config;
pub mod controller;
pub mod error;
pub mod submitter;

pub use config::ClientConfig;
pub use controller::{
    AdvanceOutcome, ControllerEvent, Direction, StepChange, StepController, StepStatus,
    SubmissionTicket, SubmitOutcome, COMPLETE_INDEX,
};
pub use error::{ControllerError, SubmitError};
pub use submitter::{
    FailureKind, FailureNotice, FormSubmitter, HttpFormSubmitter, MissingFormSubmitter,
};

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/submitter_tests.rs"]
mod submitter_tests;
