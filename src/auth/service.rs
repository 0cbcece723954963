//! User registration, login, and credential issuance.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::db::Database;
use crate::warehouse::models::OfficePayload;
use crate::warehouse::repository::OfficeRepository;

use super::repository::{RoleRepository, UserRepository};
use super::token::TokenIssuer;

/// Role granted to every newly registered user.
const DEFAULT_ROLE: &str = "admin";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    #[schema(example = "warehouse.clerk")]
    pub username: String,
    #[validate(length(min = 6))]
    #[schema(example = "securepassword123")]
    pub password: String,
    #[validate(email)]
    #[schema(example = "clerk@example.com")]
    pub email: String,
    /// Existing office the user belongs to.
    pub office_id: uuid::Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[schema(example = "superadmin")]
    pub username: String,
    #[validate(length(min = 1))]
    #[schema(example = "securepassword123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user_identifier: i64,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterWithOfficeRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 10))]
    pub office_code: String,
    #[validate(length(min = 3, max = 100))]
    pub office_name: String,
    #[serde(default)]
    pub office_address: String,
    #[serde(default)]
    pub office_city: String,
    #[serde(default)]
    pub office_phone: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterWithOfficeResponse {
    pub message: String,
    pub office_id: uuid::Uuid,
    pub user_id: i64,
}

/// Handles user registration, login, and API token rotation.
pub struct AuthService {
    db: Arc<Database>,
    issuer: TokenIssuer,
}

impl AuthService {
    pub fn new(db: Arc<Database>, issuer: TokenIssuer) -> Self {
        Self { db, issuer }
    }

    /// Register a new user under an existing office.
    ///
    /// The new user is granted the default role; if that grant fails the
    /// user still exists, and the failure is surfaced to the caller.
    pub async fn register(&self, req: RegisterRequest) -> Result<()> {
        let pool = self.db.pool();

        if UserRepository::find_by_username(pool, &req.username)
            .await?
            .is_some()
        {
            bail!("username already exists");
        }
        if UserRepository::find_by_email(pool, &req.email)
            .await?
            .is_some()
        {
            bail!("email already exists");
        }
        if OfficeRepository::find_by_id(pool, req.office_id)
            .await?
            .is_none()
        {
            bail!("office not found");
        }

        let password_hash = hash_password(&req.password)?;
        let user_id = UserRepository::create(
            pool,
            &req.username,
            &req.email,
            &password_hash,
            Some(req.office_id),
        )
        .await
        .context("Failed to insert user")?;

        if let Err(e) = self.grant_default_role(user_id).await {
            bail!("user created but role assignment failed: {}", e);
        }
        Ok(())
    }

    /// Create an office and its first user together.
    pub async fn register_with_office(
        &self,
        req: RegisterWithOfficeRequest,
    ) -> Result<RegisterWithOfficeResponse> {
        let pool = self.db.pool();

        if UserRepository::find_by_username(pool, &req.username)
            .await?
            .is_some()
        {
            bail!("username already exists");
        }
        if UserRepository::find_by_email(pool, &req.email)
            .await?
            .is_some()
        {
            bail!("email already exists");
        }
        if OfficeRepository::find_by_code(pool, &req.office_code)
            .await?
            .is_some()
        {
            bail!("office code already exists");
        }

        let office = OfficeRepository::create(
            pool,
            &OfficePayload {
                code: req.office_code,
                name: req.office_name,
                address: req.office_address,
                city: req.office_city,
                phone: req.office_phone,
                status: "active".to_string(),
            },
        )
        .await
        .context("failed to create office")?;

        let password_hash = hash_password(&req.password)?;
        let user_id = UserRepository::create(
            pool,
            &req.username,
            &req.email,
            &password_hash,
            Some(office.id),
        )
        .await
        .context("failed to create user")?;

        let message = match self.grant_default_role(user_id).await {
            Ok(()) => "Office and user registered successfully".to_string(),
            Err(e) => {
                tracing::warn!(user_id, "role assignment failed after registration: {}", e);
                "Office and user registered successfully, but role assignment failed".to_string()
            }
        };

        Ok(RegisterWithOfficeResponse {
            message,
            office_id: office.id,
            user_id,
        })
    }

    /// Validate credentials and issue a signed token.
    ///
    /// Login requires at least one assigned role.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let pool = self.db.pool();

        let user = UserRepository::find_by_username(pool, &req.username)
            .await?
            .ok_or_else(|| anyhow::anyhow!("invalid credentials"))?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| anyhow::anyhow!("invalid credentials"))?;

        let roles = RoleRepository::list_for_user(pool, user.id).await?;
        let Some(first_role) = roles.first() else {
            bail!("user has no roles assigned");
        };

        let token = self.issuer.issue(user.id)?;

        Ok(LoginResponse {
            user_identifier: user.id,
            role: first_role.name.clone(),
            token,
        })
    }

    /// Replace the caller's opaque API token, returning the new value once.
    pub async fn rotate_api_token(&self, user_id: i64) -> Result<String> {
        let token_bytes: [u8; 32] = rand::random();
        let token = hex::encode(token_bytes);

        let updated = UserRepository::set_api_token(self.db.pool(), user_id, &token).await?;
        if !updated {
            bail!("user not found");
        }
        Ok(token)
    }

    async fn grant_default_role(&self, user_id: i64) -> Result<()> {
        let pool = self.db.pool();
        let role = RoleRepository::find_by_name(pool, DEFAULT_ROLE)
            .await?
            .ok_or_else(|| anyhow::anyhow!("{} role not found", DEFAULT_ROLE))?;
        RoleRepository::assign_to_user(pool, user_id, role.id).await?;
        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))
        .map(|hash| hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("securepassword123").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"securepassword123", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong-password", &parsed)
                .is_err()
        );
    }

    #[test]
    fn register_request_validation() {
        let req = RegisterRequest {
            username: "ab".to_string(), // too short
            password: "securepassword123".to_string(),
            email: "clerk@example.com".to_string(),
            office_id: uuid::Uuid::new_v4(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            username: "clerk".to_string(),
            password: "securepassword123".to_string(),
            email: "not-an-email".to_string(),
            office_id: uuid::Uuid::new_v4(),
        };
        assert!(req.validate().is_err());
    }
}
