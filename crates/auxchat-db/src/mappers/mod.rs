//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.

mod account;
mod message;
mod photo;
mod private_message;
mod reaction;
mod verification;
