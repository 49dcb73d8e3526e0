use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    SessionsNotFound,
    SessionsExpired,

    SongsNotFound,
    SongsFetchFailed,
    SongsDifficultyNotFound,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            // retrieve-side bodies are part of the share-page contract
            AppError::SessionsNotFound => "Not found",
            AppError::SessionsExpired => "expired",

            AppError::SongsNotFound => "Song could not be found.",
            AppError::SongsFetchFailed => "Failed to load song metadata.",
            AppError::SongsDifficultyNotFound => "No chart matches the requested difficulty.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed => StatusCode::BAD_REQUEST,

            AppError::SessionsNotFound
            | AppError::SongsNotFound
            | AppError::SongsDifficultyNotFound => StatusCode::NOT_FOUND,

            AppError::SessionsExpired => StatusCode::GONE,
            AppError::SongsFetchFailed => StatusCode::BAD_GATEWAY,
            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            error: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
