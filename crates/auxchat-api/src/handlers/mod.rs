//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod conversations;
pub mod health;
pub mod messages;
pub mod photos;
pub mod reactions;
pub mod uploads;
pub mod users;
