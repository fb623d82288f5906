use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use mtendere_error::error::AuthError;
use mtendere_types::entities::User;
use mtendere_types::enums::UserRole;
use password_auth::{generate_hash, verify_password};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every token the server issues. Validity is purely
/// cryptographic plus expiry; the credential store is not consulted again
/// for the token's lifetime, so a role change takes effect on next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    pub fn new(jwt_secret: &str, token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry_hours,
        }
    }

    pub fn generate_jwt(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.token_expiry_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenCreationError)
    }

    /// Validate signature and expiry, returning the embedded claims
    /// unchanged on success.
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Compare a supplied password against the stored hash. The error is
    /// the same one the login route returns for an unknown email.
    pub fn validate_user(&self, user: &User, password: &str) -> Result<(), AuthError> {
        verify_password(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)
    }

    pub fn hash_password(&self, password: &str) -> String {
        generate_hash(password)
    }
}
