//! Registration, authentication and user management service

use validator::Validate;

use crate::{
    auth::{PasswordHasher, TokenService},
    error::{AppError, AppResult},
    models::{NewUser, RegisterUser, Role, User},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct UsersService {
    repository: SharedStore,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl UsersService {
    pub fn new(repository: SharedStore, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Register a new user with the `user` role.
    ///
    /// The email lookup and the insert are two separate store calls, so a
    /// concurrent registration can slip between them. The store's uniqueness
    /// conflict is reported as `AlreadyExists` just like the pre-check.
    pub async fn register_user(&self, request: RegisterUser) -> AppResult<User> {
        request.validate()?;

        if self
            .repository
            .get_user_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .repository
            .create_user(&NewUser {
                email: request.email,
                password_hash,
                name: request.name,
                role: Role::User,
            })
            .await?;

        tracing::info!("Registered user id={}", user.id);
        Ok(user)
    }

    /// Check credentials. Unknown email and wrong password fail identically.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .get_user_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticate and issue a token with the default lifetime
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self.authenticate(email, password).await?;
        let token = self.tokens.issue_default(user.id, user.role)?;
        tracing::info!("User id={} logged in", user.id);
        Ok((token, user))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        Ok(self.repository.get_user_by_id(id).await?)
    }

    /// Change a user's role.
    ///
    /// No authorization happens here: callers must pass the admin gate
    /// (`auth::require_role`) first.
    pub async fn update_user_role(&self, user_id: i32, role: Role) -> AppResult<()> {
        self.repository.update_user_role(user_id, role).await?;
        tracing::info!("User id={} role set to {}", user_id, role);
        Ok(())
    }
}
