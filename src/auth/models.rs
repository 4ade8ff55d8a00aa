// src/auth/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public view of an account, safe to return to clients.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub mbti_type: Option<String>,
    pub city: Option<String>,
}

/// Full row including the password hash; never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithPassword {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub mbti_type: Option<String>,
    pub city: Option<String>,
}

impl From<UserWithPassword> for User {
    fn from(u: UserWithPassword) -> Self {
        User {
            id: u.id,
            username: u.username,
            email: u.email,
            mbti_type: u.mbti_type,
            city: u.city,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub mbti_type: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial update: only supplied fields replace stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub mbti_type: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
