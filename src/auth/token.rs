//! HS256 token issuance and verification.
//!
//! Tokens carry two claims: a numeric `user_id` and an absolute `exp`,
//! fixed at 24 hours from issuance. The algorithm family is restricted to
//! symmetric HMAC; a token signed with anything else never verifies.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::error::{AuthError, INVALID_JWT};

/// Token lifetime from issuance.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims embedded in issued tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
}

/// Issues and verifies signed credentials from a shared symmetric secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    /// Build from the shared secret. An empty secret is a configuration
    /// error and fails construction.
    pub fn from_secret(secret: &str) -> Result<Self> {
        anyhow::ensure!(!secret.is_empty(), "JWT secret cannot be empty");
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Issue a signed token for `user_id`, expiring in 24 hours.
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .expect("valid timestamp")
            .timestamp();

        let claims = Claims {
            user_id,
            exp: expiration as usize,
        };

        encode(&Header::default(), &claims, &self.encoding).context("Failed to generate token")
    }

    /// Verify a token and extract the subject identifier.
    ///
    /// HS256 only: a token whose header names any other algorithm fails
    /// verification, as does a bad signature or an expired `exp`. A token
    /// that verifies but has no numeric `user_id` claim is reported
    /// separately as [`AuthError::MissingClaim`].
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                // Signature and expiry passed but the payload does not carry
                // the subject claim in the expected numeric shape.
                ErrorKind::Json(_) => AuthError::MissingClaim,
                _ => AuthError::InvalidCredential(INVALID_JWT),
            })?;
        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issuer(secret: &str) -> TokenIssuer {
        TokenIssuer::from_secret(secret).unwrap()
    }

    #[test]
    fn empty_secret_fails_construction() {
        assert!(TokenIssuer::from_secret("").is_err());
    }

    #[test]
    fn round_trip_recovers_subject() {
        let issuer = issuer("test-secret");
        for user_id in [1i64, 42, 1001, i64::MAX] {
            let token = issuer.issue(user_id).unwrap();
            assert_eq!(issuer.verify(&token).unwrap(), user_id);
        }
    }

    #[test]
    fn verification_is_idempotent() {
        let issuer = issuer("test-secret");
        let token = issuer.issue(7).unwrap();
        assert_eq!(issuer.verify(&token).unwrap(), 7);
        assert_eq!(issuer.verify(&token).unwrap(), 7);
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = issuer("secret-a").issue(42).unwrap();
        let result = issuer("secret-b").verify(&token);
        assert_eq!(result, Err(AuthError::InvalidCredential(INVALID_JWT)));
    }

    #[test]
    fn expired_token_rejected() {
        let issuer = issuer("test-secret");
        // Past the default 60s validation leeway.
        let claims = Claims {
            user_id: 42,
            exp: (Utc::now().timestamp() - 120) as usize,
        };
        let token = encode(&Header::default(), &claims, &issuer.encoding).unwrap();
        assert_eq!(
            issuer.verify(&token),
            Err(AuthError::InvalidCredential(INVALID_JWT))
        );
    }

    #[test]
    fn non_hs256_algorithm_rejected() {
        // Same secret, different HMAC width: the verifier only accepts the
        // algorithm it was built for.
        let issuer = issuer("test-secret");
        let claims = Claims {
            user_id: 42,
            exp: (Utc::now().timestamp() + 3600) as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(
            issuer.verify(&token),
            Err(AuthError::InvalidCredential(INVALID_JWT))
        );
    }

    #[test]
    fn missing_subject_claim_rejected() {
        let issuer = issuer("test-secret");
        let claims = json!({ "exp": Utc::now().timestamp() + 3600 });
        let token = encode(&Header::default(), &claims, &issuer.encoding).unwrap();
        assert_eq!(issuer.verify(&token), Err(AuthError::MissingClaim));
    }

    #[test]
    fn non_numeric_subject_claim_rejected() {
        let issuer = issuer("test-secret");
        let claims = json!({ "user_id": "42", "exp": Utc::now().timestamp() + 3600 });
        let token = encode(&Header::default(), &claims, &issuer.encoding).unwrap();
        assert_eq!(issuer.verify(&token), Err(AuthError::MissingClaim));
    }

    #[test]
    fn garbage_token_rejected() {
        let issuer = issuer("test-secret");
        assert_eq!(
            issuer.verify("not.a.token"),
            Err(AuthError::InvalidCredential(INVALID_JWT))
        );
    }
}
