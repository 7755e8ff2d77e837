//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies (bad syntax, missing fields, wrong content type) become
/// `AppError::BadRequest`; bodies that parse but fail validation become
/// `AppError::Validation`. Both answer 400.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::ValidatedJson;
/// use user_registry::domain::NewUser;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<NewUser>) {
///     // payload.id, payload.password and payload.name are non-empty
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
