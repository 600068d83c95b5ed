use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Group ID {0} not found")]
    NotFound(i32),
    #[error("Group name {0:?} is already taken")]
    NameTaken(String),
}

impl IntoResponse for GroupError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(group_id) => {
                tracing::debug!(group_id = %group_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::NameTaken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, self.to_string())
            }
        }
    }
}
