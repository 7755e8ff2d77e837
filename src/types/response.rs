use std::collections::HashMap;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Envelope returned by read endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResponseMessage {
    /// HTTP status code, repeated in the body
    #[schema(example = 200)]
    pub status: u16,
    /// Human-readable outcome
    #[schema(example = "Lookup successful")]
    pub message: String,
    /// Payload keyed by name (`users` or `user`)
    #[schema(value_type = Object)]
    pub data: HashMap<String, Value>,
}

impl ResponseMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: HashMap::new(),
        }
    }

    /// Successful response carrying a single serialized entry
    pub fn ok<T: Serialize>(
        message: impl Into<String>,
        key: impl Into<String>,
        value: T,
    ) -> AppResult<Self> {
        Self::new(StatusCode::OK, message).with(key, value)
    }

    /// Add an entry to the data map
    pub fn with<T: Serialize>(mut self, key: impl Into<String>, value: T) -> AppResult<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| AppError::internal(format!("Failed to serialize response: {}", e)))?;
        self.data.insert(key.into(), value);
        Ok(self)
    }
}

impl IntoResponse for ResponseMessage {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Created response helper: 201 with a `Location` header and no body
pub struct Created(pub String);

impl Created {
    pub fn at(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        match HeaderValue::from_str(&self.0) {
            Ok(location) => (StatusCode::CREATED, [(header::LOCATION, location)]).into_response(),
            Err(e) => AppError::internal(format!("Invalid location '{}': {}", self.0, e))
                .into_response(),
        }
    }
}

/// No content response helper (DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
