//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::models::{Page, PageParams, ValidationError};

use super::error::ApiError;

/// Extract and bound-check the list window from the query string.
///
/// Missing parameters fall back to the defaults (offset 0, limit 2);
/// values beyond the ceiling reject the request.
pub struct ValidPage(pub Page);

impl<S> FromRequestParts<S> for ValidPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PageParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "query",
                    reason: "set_offset and set_limit must be non-negative integers",
                })
            })?;

        let page = Page::try_from(params)?;
        Ok(Self(page))
    }
}
