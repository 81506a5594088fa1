use form_schema::ValidationResult;
use shared::draft::DraftError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("no submission endpoint configured")]
    Unavailable,
}

impl SubmitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("form is invalid: {} field(s) need attention", .0.len())]
    Invalid(ValidationResult),
    #[error("a submission is already in flight")]
    SubmissionPending,
    #[error("form has already been submitted")]
    AlreadySubmitted,
    #[error("submission result belongs to an abandoned attempt")]
    StaleSubmission,
    #[error(transparent)]
    Draft(#[from] DraftError),
}
