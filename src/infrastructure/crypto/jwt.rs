//! JWT token handling
//!
//! Tokens are self-contained HS256 credentials carrying the subject's id and
//! email. Privilege (the admin flag) is deliberately NOT embedded: the auth
//! middleware re-reads the user record on every request, so a privilege
//! change takes effect without waiting for the token to expire.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in days
    pub expiry_days: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "super-secret-key-change-in-production".to_string()),
            expiry_days: std::env::var("JWT_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            issuer: "askboard".to_string(),
        }
    }
}

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    /// Create new claims for a user
    pub fn new(user_id: &str, email: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::days(config.expiry_days);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// Errors that can occur during authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential supplied
    MissingToken,
    /// Signature does not verify, or the token is malformed
    InvalidToken,
    /// Signature is valid but the token is past its expiry
    ExpiredToken,
    /// Token subject no longer resolves to a user record
    UserNotFound,
    /// Authenticated but not an admin
    NotAdmin,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken => write!(f, "Missing authentication token"),
            Self::InvalidToken => write!(f, "Invalid authentication token"),
            Self::ExpiredToken => write!(f, "Token has expired"),
            Self::UserNotFound => write!(f, "User not found"),
            Self::NotAdmin => write!(f, "Admin privileges required"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Create a signed token for a user
pub fn create_token(
    user_id: &str,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(user_id, email, config);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a token
///
/// Distinguishes an invalid signature from an expired-but-authentic token so
/// callers can reject each with the right message. Expiry is checked with
/// zero clock leeway.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);
    validation.leeway = 0;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            expiry_days: 7,
            issuer: "askboard".to_string(),
        }
    }

    #[test]
    fn create_and_verify_roundtrip() {
        let config = test_config();
        let token = create_token("user-123", "alice@example.com", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "askboard");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let config = test_config();
        let token = create_token("user-123", "alice@example.com", &config).unwrap();

        // Flip the last signature character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(
            verify_token(&tampered, &config).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let config = test_config();
        let token = create_token("user-123", "alice@example.com", &config).unwrap();

        let other = JwtConfig {
            secret: "different-secret".to_string(),
            ..test_config()
        };
        assert_eq!(
            verify_token(&token, &other).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn garbage_token_is_invalid() {
        let config = test_config();
        assert_eq!(
            verify_token("not-a-token", &config).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn expired_token_is_reported_distinctly() {
        let config = test_config();

        // Authentic signature, expiry one second in the past
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "user-123".to_string(),
            email: "alice@example.com".to_string(),
            exp: now - 1,
            iat: now - 60,
            iss: config.issuer.clone(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            verify_token(&token, &config).unwrap_err(),
            AuthError::ExpiredToken
        );
    }

    #[test]
    fn token_near_expiry_still_verifies() {
        let config = test_config();

        // Expiry a few seconds from now: still valid with zero leeway
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "user-123".to_string(),
            email: "alice@example.com".to_string(),
            exp: now + 5,
            iat: now - 60,
            iss: config.issuer.clone(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let verified = verify_token(&token, &config).unwrap();
        assert_eq!(verified.sub, "user-123");
    }
}
