use thiserror::Error;

/// Validation outcomes of roster operations. The `Display` text is the
/// client-facing `detail` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,

    #[error("The student is already signed up")]
    AlreadyEnrolled,

    #[error("Participant not found in activity")]
    ParticipantNotFound,

    #[error("Activity is full")]
    Full,

    #[error("Missing required query parameter: email")]
    MissingEmail,
}

pub type RosterResult<T> = Result<T, RosterError>;
