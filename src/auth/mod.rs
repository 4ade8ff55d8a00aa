// src/auth/mod.rs

pub mod extract;
pub mod jwt;
pub mod models;
pub mod password;
pub mod service;

pub use extract::AuthUser;
pub use jwt::Claims;
pub use models::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
pub use service::{AuthError, AuthService};
