// src/auth/service.rs

use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use super::jwt::create_token;
use super::models::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, User, UserWithPassword};
use super::password::{hash_password, verify_password};
use crate::config::AuthConfig;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    MissingFields(String),
    #[error("This email address is already registered")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::Internal(e.into())
    }
}

pub struct AuthService {
    db: SqlitePool,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(db: SqlitePool, config: AuthConfig) -> Self {
        Self { db, config }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<User, AuthError> {
        let username = req.username.trim().to_string();
        let email = normalize_email(&req.email);

        if username.is_empty() || email.is_empty() || req.password.is_empty() {
            return Err(AuthError::MissingFields(
                "username, email and password are required".to_string(),
            ));
        }

        if self.email_exists(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let user_id = Uuid::new_v4().to_string();
        let password_hash = hash_password(&req.password)?;
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, mbti_type, city, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .bind(&req.mbti_type)
        .bind(&req.city)
        .bind(now)
        .bind(now)
        .execute(&self.db)
        .await?;

        let user = self.get_user_by_id(&user_id).await?;
        Ok(user.into())
    }

    /// Verifies credentials and mints a token carrying the claims snapshot.
    /// Unknown email and wrong password collapse into the same error so the
    /// response never reveals which one was wrong.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AuthError> {
        let email = normalize_email(&req.email);

        let user = sqlx::query_as::<_, UserWithPassword>("SELECT * FROM users WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.db)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = create_token(
            &self.config.jwt_secret,
            self.config.token_ttl_hours,
            &user.id,
            &user.username,
            &user.email,
            user.city.clone(),
            user.mbti_type.clone(),
        )?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Fresh read from storage, unlike the claims snapshot.
    pub async fn get_profile(&self, user_id: &str) -> Result<User, AuthError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        req: UpdateProfileRequest,
    ) -> Result<User, AuthError> {
        let current = self.get_user_by_id(user_id).await?;
        let now = chrono::Utc::now().timestamp();

        let username = req.username.unwrap_or(current.username);
        let mbti_type = req.mbti_type.or(current.mbti_type);
        let city = req.city.or(current.city);

        sqlx::query(
            "UPDATE users SET username = ?, mbti_type = ?, city = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&username)
        .bind(&mbti_type)
        .bind(&city)
        .bind(now)
        .bind(user_id)
        .execute(&self.db)
        .await?;

        let user = self.get_user_by_id(user_id).await?;
        Ok(user.into())
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<UserWithPassword, AuthError> {
        sqlx::query_as::<_, UserWithPassword>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(AuthError::NotFound)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.db)
            .await?;

        Ok(count.0 > 0)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
