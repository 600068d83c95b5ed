use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Message returned in the envelope of every successful request
pub static SUCCESS_MESSAGE: &str = "success";

/// Uniform envelope wrapping every successful API response
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Status code mirrored from the HTTP response, 200 on success
    pub code: u16,
    /// Human readable outcome, "success" on the happy path
    pub message: String,
    /// Endpoint specific payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// The envelope returned when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Status code mirrored from the HTTP response
    pub code: u16,
    /// The error message
    pub message: String,
    /// Always null for errors
    pub data: Option<String>,
}

/// Page number and size for paginated listings
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Items per page, defaults to 20
    pub size: Option<u64>,
}

/// Satellite ids sent to the association and batch endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteIdsDto {
    #[serde(default)]
    pub satellite_ids: Vec<i32>,
}
