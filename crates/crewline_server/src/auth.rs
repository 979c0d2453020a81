//! Authentication utilities

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use crewline_api::claims::AccessTokenClaims;
use crewline_core::UserId;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::error::ServerResult;

/// Hash a plaintext password
pub fn hash_password(password: &str) -> ServerResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> ServerResult<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate an access token
pub fn generate_access_token(
    user_id: UserId,
    is_admin: bool,
    encoding_key: &EncodingKey,
    ttl_seconds: u64,
) -> ServerResult<String> {
    let now = chrono::Utc::now().timestamp();

    let claims = AccessTokenClaims {
        sub: user_id,
        iat: now,
        exp: now + ttl_seconds as i64,
        jti: uuid::Uuid::new_v4(),
        token_type: "access".to_string(),
        is_admin,
    };

    Ok(encode(&Header::default(), &claims, encoding_key)?)
}

/// Validate an access token
pub fn validate_access_token(
    token: &str,
    decoding_key: &DecodingKey,
) -> ServerResult<AccessTokenClaims> {
    let token_data = decode::<AccessTokenClaims>(token, decoding_key, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn token_round_trip_carries_the_admin_flag() {
        let encoding_key = EncodingKey::from_secret(b"test-secret");
        let decoding_key = DecodingKey::from_secret(b"test-secret");
        let user_id = UserId::generate();

        let token = generate_access_token(user_id, true, &encoding_key, 3600).unwrap();
        let claims = validate_access_token(&token, &decoding_key).unwrap();

        assert_eq!(claims.sub, user_id);
        assert!(claims.is_admin);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn token_signed_with_another_key_is_rejected() {
        let encoding_key = EncodingKey::from_secret(b"test-secret");
        let wrong_key = DecodingKey::from_secret(b"other-secret");

        let token =
            generate_access_token(UserId::generate(), false, &encoding_key, 3600).unwrap();

        assert!(validate_access_token(&token, &wrong_key).is_err());
    }
}
