/// Errors returned by the assessment core.
///
/// Every variant is a typed caller error; the HTTP layer maps them onto
/// status codes. The core never panics on bad input.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("assessment type {0:?} is not registered")]
    TemplateNotFound(String),
    #[error("assessment {0} not found")]
    NotFound(String),
    #[error("client {0} not found")]
    ClientNotFound(String),
    #[error("assessment {0} has already been completed")]
    AlreadyCompleted(String),
    #[error("invalid responses: {0}")]
    InvalidResponses(String),
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
