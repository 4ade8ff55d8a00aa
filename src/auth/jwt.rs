// src/auth/jwt.rs

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims snapshot embedded into every token at login time. Fixed shape, not
/// an open-ended map; the optional fields stay exactly as they were when the
/// token was minted and are not refreshed from storage per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub email: String,
    pub city: Option<String>,
    pub mbti_type: Option<String>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

pub fn create_token(
    secret: &str,
    ttl_hours: i64,
    user_id: &str,
    username: &str,
    email: &str,
    city: Option<String>,
    mbti_type: Option<String>,
) -> Result<String> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::hours(ttl_hours))
        .ok_or_else(|| anyhow!("Failed to calculate expiration"))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        city,
        mbti_type,
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    let header = Header::default();
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, &claims, &key).map_err(|e| anyhow!("Failed to create token: {}", e))
}

pub fn verify_token(secret: &str, token: &str) -> Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| anyhow!("Invalid token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_preserves_claims() {
        let token = create_token(
            "test-secret",
            12,
            "user-1",
            "hanako",
            "hanako@example.com",
            Some("Tokyo".to_string()),
            Some("INFP".to_string()),
        )
        .unwrap();

        let claims = verify_token("test-secret", &token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "hanako");
        assert_eq!(claims.email, "hanako@example.com");
        assert_eq!(claims.city.as_deref(), Some("Tokyo"));
        assert_eq!(claims.mbti_type.as_deref(), Some("INFP"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(
            "secret-a",
            12,
            "user-1",
            "hanako",
            "hanako@example.com",
            None,
            None,
        )
        .unwrap();
        assert!(verify_token("secret-b", &token).is_err());
    }
}
