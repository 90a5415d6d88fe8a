//! Pagination extractor
//!
//! Extracts `limit` / `offset` paging for the message feed.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use auxchat_service::dto::MessageListQuery;

use crate::response::ApiError;

/// Clamped feed paging parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Maximum number of items to return (1-100)
    pub limit: i64,
    /// Number of items to skip (never negative)
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from(MessageListQuery::default())
    }
}

impl From<MessageListQuery> for Pagination {
    fn from(query: MessageListQuery) -> Self {
        Self {
            limit: query.limit(),
            offset: query.offset(),
        }
    }
}

impl From<Pagination> for MessageListQuery {
    fn from(pagination: Pagination) -> Self {
        Self {
            limit: Some(pagination.limit),
            offset: Some(pagination.offset),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MessageListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}
