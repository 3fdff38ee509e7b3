use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::RosterError;
use crate::models::DetailResponse;

/// Roster failure rendered as `{"detail": ...}` with its HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(pub RosterError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RosterError::NotFound | RosterError::ParticipantNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled | RosterError::Full => StatusCode::BAD_REQUEST,
            RosterError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(DetailResponse::new(self.0.to_string()))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (RosterError::NotFound, StatusCode::NOT_FOUND),
            (RosterError::ParticipantNotFound, StatusCode::NOT_FOUND),
            (RosterError::AlreadyEnrolled, StatusCode::BAD_REQUEST),
            (RosterError::Full, StatusCode::BAD_REQUEST),
            (RosterError::MissingEmail, StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status, "{:?}", err);
            assert_eq!(ApiError(err).into_response().status(), status);
        }
    }

    #[test]
    fn detail_strings() {
        assert_eq!(RosterError::NotFound.to_string(), "Activity not found");
        assert_eq!(
            RosterError::AlreadyEnrolled.to_string(),
            "The student is already signed up"
        );
        assert_eq!(
            RosterError::ParticipantNotFound.to_string(),
            "Participant not found in activity"
        );
    }
}
