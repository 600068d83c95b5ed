//! Error types for the satdeck server.
//!
//! Errors are split by domain (configuration, satellites, groups, request validation) and
//! aggregated by [`Error`]. Every error renders as the API envelope `{ code, message, data }`
//! with `data` set to null and `code` mirroring the HTTP status.

pub mod config;
pub mod group;
pub mod satellite;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, group::GroupError, satellite::SatelliteError,
        validation::ValidationError,
    },
};

/// Main error type for the satdeck server.
///
/// Domain errors map to client-facing status codes (400, 404, 409); anything else,
/// including database failures, is logged and reported as a 500 without details.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Satellite lookup error.
    #[error(transparent)]
    SatelliteError(#[from] SatelliteError),
    /// Group lookup or uniqueness error.
    #[error(transparent)]
    GroupError(#[from] GroupError),
    /// Malformed or incomplete request.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::SatelliteError(err) => err.into_response(),
            Self::GroupError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the error envelope for the provided status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
