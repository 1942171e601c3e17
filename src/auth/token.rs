// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Access-token signing and verification.
//!
//! Tokens are JWTs signed with a process-wide shared secret (HS256). The
//! secret is loaded once at startup; rotation requires a restart.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::models::UserId;

use super::claims::AccessClaims;

/// Opaque verification failure.
///
/// Malformed structure, signature mismatch and expiry all collapse into this
/// one category; callers never need to distinguish, and responses must not.
/// The underlying cause is logged at debug level only.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("token verification failed")]
pub struct VerifyError;

/// Token signing/verification material, built once at startup.
pub struct TokenConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenConfig {
    /// Build from the shared secret and the issued-token lifetime.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew allowance: a past exp always fails verification.
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Verify a credential's signature and expiry and decode its claims.
    ///
    /// Pure and synchronous: no I/O, no retry.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, VerifyError> {
        decode::<AccessClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "access token rejected");
                VerifyError
            })
    }

    /// Issue a token for the given account id, expiring after the configured
    /// lifetime. Used by startup seeding and by tests.
    pub fn issue(&self, user_id: &UserId) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    fn config() -> TokenConfig {
        TokenConfig::new(SECRET, 3600)
    }

    #[test]
    fn issued_tokens_verify_and_carry_the_subject() {
        let config = config();
        let token = config.issue(&UserId::from("user_42")).unwrap();

        let claims = config.verify(&token).unwrap();
        assert_eq!(claims.sub, "user_42");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "user_42".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(config().verify(&token), Err(VerifyError));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let forged = TokenConfig::new("attacker-secret", 3600)
            .issue(&UserId::from("user_42"))
            .unwrap();

        assert_eq!(config().verify(&forged), Err(VerifyError));
    }

    #[test]
    fn structurally_malformed_tokens_are_rejected() {
        let config = config();
        assert_eq!(config.verify(""), Err(VerifyError));
        assert_eq!(config.verify("not-a-jwt"), Err(VerifyError));
        assert_eq!(config.verify("a.b"), Err(VerifyError));
    }

    #[test]
    fn tokens_with_a_tampered_payload_are_rejected() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let config = config();
        let token = config.issue(&UserId::from("user_42")).unwrap();

        // Swap the subject while keeping the original signature.
        let mut parts: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.encode(
            format!(
                r#"{{"sub":"admin_1","iat":0,"exp":{}}}"#,
                chrono::Utc::now().timestamp() + 3600
            )
            .as_bytes(),
        );
        parts[1] = payload.as_str();
        let tampered = parts.join(".");

        assert_eq!(config.verify(&tampered), Err(VerifyError));
    }
}
