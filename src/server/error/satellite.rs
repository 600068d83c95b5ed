use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SatelliteError {
    #[error("Satellite ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for SatelliteError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(satellite_id) => {
                tracing::debug!(satellite_id = %satellite_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
        }
    }
}
