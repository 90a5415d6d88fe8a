//! Session and phone tokens

mod jwt;

pub use jwt::{Claims, JwtService, PhoneToken, TokenPair, TokenType};
