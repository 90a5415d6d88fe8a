//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paging and path ids.

mod admin;
mod auth;
mod pagination;
mod path;
mod validated;

pub use admin::{AdminSecret, ADMIN_SECRET_HEADER};
pub use auth::AuthUser;
pub use pagination::Pagination;
pub use path::IdPath;
pub use validated::ValidatedJson;
