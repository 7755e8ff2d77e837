//! User number path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Store number taken from the `{number}` path segment.
///
/// Integers outside the `u32` range (negative or too large) can never name
/// a stored record and resolve to `AppError::NotFound`. Anything that is
/// not an integer is `AppError::BadRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserNumber(pub u32);

#[async_trait]
impl<S> FromRequestParts<S> for UserNumber
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_number(&raw).map(UserNumber)
    }
}

fn parse_number(raw: &str) -> Result<u32, AppError> {
    if let Ok(number) = raw.parse::<u32>() {
        return Ok(number);
    }

    let digits = raw.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(number = raw, "User number out of range");
        return Err(AppError::NotFound);
    }

    Err(AppError::bad_request(format!(
        "User number must be an integer, got '{}'",
        raw
    )))
}
