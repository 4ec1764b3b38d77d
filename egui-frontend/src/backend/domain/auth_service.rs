//! Login validation against the mock user list.
//!
//! This is a demo credential check, not a security mechanism: every account
//! shares one hardcoded password and nothing is hashed or stored.

use log::{info, warn};
use thiserror::Error;

use crate::backend::domain::commands::auth::LoginCommand;
use shared::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

#[derive(Clone)]
pub struct AuthService {
    password: String,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            password: "password".to_string(),
        }
    }

    /// Create an AuthService with a custom password (for testing).
    #[cfg(test)]
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Look the user up by email (trimmed, case-insensitive) and check the
    /// shared password.
    pub fn login(&self, users: &[User], command: LoginCommand) -> Result<User, AuthError> {
        let email = command.email.trim();
        let user = users.iter().find(|user| user.email.eq_ignore_ascii_case(email));

        match user {
            Some(user) if command.password == self.password => {
                info!("login successful for {} ({})", user.name, user.email);
                Ok(user.clone())
            }
            _ => {
                warn!("login failed for '{}'", email);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn users() -> Vec<User> {
        vec![
            User {
                id: "u1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@farm.com".to_string(),
                role: Role::Admin,
            },
            User {
                id: "u2".to_string(),
                name: "Staff User".to_string(),
                email: "staff@farm.com".to_string(),
                role: Role::Staff,
            },
        ]
    }

    fn command(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_login() {
        let service = AuthService::new();
        let user = service.login(&users(), command("admin@farm.com", "password")).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_email_is_trimmed_and_case_insensitive() {
        let service = AuthService::new();
        let user = service
            .login(&users(), command("  Staff@Farm.com ", "password"))
            .unwrap();
        assert_eq!(user.id, "u2");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let service = AuthService::new();
        let result = service.login(&users(), command("admin@farm.com", "passw0rd"));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_email_rejected() {
        let service = AuthService::new();
        let result = service.login(&users(), command("nobody@farm.com", "password"));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_custom_password() {
        let service = AuthService::with_password("moo");
        assert!(service.login(&users(), command("admin@farm.com", "moo")).is_ok());
        assert!(service.login(&users(), command("admin@farm.com", "password")).is_err());
    }
}
