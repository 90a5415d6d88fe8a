//! JWT utilities for authentication
//!
//! Three token kinds share one signing key: short-lived access tokens,
//! long-lived refresh tokens, and phone tokens that prove a phone number
//! passed SMS verification and may be used to register an account.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
    Phone,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID, or the phone number for phone tokens)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    pub token_type: TokenType,
}

impl Claims {
    /// Get the account ID from the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a numeric ID
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Proof of a verified phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneToken {
    pub token: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
    phone_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry times (seconds)
    #[must_use]
    pub fn new(
        secret: &str,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
        phone_token_expiry: i64,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
            refresh_token_expiry,
            phone_token_expiry,
        }
    }

    /// Generate a token pair for an account
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_token_pair(&self, user_id: i64) -> Result<TokenPair, AppError> {
        let subject = user_id.to_string();
        Ok(TokenPair {
            access_token: self.encode_token(&subject, TokenType::Access)?,
            refresh_token: self.encode_token(&subject, TokenType::Refresh)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Issue a phone token for a freshly verified phone number
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_phone_token(&self, phone: &str) -> Result<PhoneToken, AppError> {
        Ok(PhoneToken {
            token: self.encode_token(phone, TokenType::Phone)?,
            expires_in: self.phone_token_expiry,
        })
    }

    fn encode_token(&self, subject: &str, token_type: TokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
            TokenType::Phone => self.phone_token_expiry,
        };

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    fn decode_expecting(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;
        if claims.token_type != expected {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_expecting(token, TokenType::Access)
    }

    /// Validate a phone token and return the verified phone number
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not a phone token
    pub fn validate_phone_token(&self, token: &str) -> Result<String, AppError> {
        self.decode_expecting(token, TokenType::Phone)
            .map(|claims| claims.sub)
    }

    /// Refresh tokens using a valid refresh token
    ///
    /// # Errors
    /// Returns an error if the refresh token is invalid or expired
    pub fn refresh_tokens(&self, refresh_token: &str) -> Result<(i64, TokenPair), AppError> {
        let claims = self.decode_expecting(refresh_token, TokenType::Refresh)?;
        let user_id = claims.user_id()?;
        Ok((user_id, self.generate_token_pair(user_id)?))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .field("phone_token_expiry", &self.phone_token_expiry)
            .finish_non_exhaustive()
    }
}
