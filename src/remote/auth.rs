use std::sync::LazyLock;

use regex::Regex;
use secrecy::SecretString;
use tracing::{info, warn};

use crate::engine::mapper::map_user;
use crate::error::AppError;
use crate::models::user::{AdminUser, LoginRequest, RemoteUserRecord};
use crate::remote::ApiClient;

const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// 10 to 15 digits once separators like spaces, dashes and `+` are dropped.
pub fn is_valid_phone(candidate: &str) -> bool {
    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

/// Checks run before any network call; each failure names the offending field.
pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), AppError> {
    let identifier = identifier.trim();

    if identifier.is_empty() || password.is_empty() {
        let field = if identifier.is_empty() { "identifier" } else { "password" };
        return Err(AppError::validation(field, "Please fill in all fields"));
    }

    if !is_valid_email(identifier) && !is_valid_phone(identifier) {
        return Err(AppError::validation(
            "identifier",
            "Please enter a valid email address or phone number",
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters long"),
        ));
    }

    Ok(())
}

impl ApiClient {
    /// Authenticates against `POST /users/login` and signs the admin into the
    /// session. The admin-flag check happens here, after the backend has
    /// already accepted the credentials.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AdminUser, AppError> {
        validate_credentials(identifier, password)?;

        let body = LoginRequest {
            phone: identifier.trim().to_string(),
            password: SecretString::from(password.to_string()),
        };
        let request = self.http.post(self.url("users/login")).json(&body);
        let response = self.send("login", request).await?;
        let record: RemoteUserRecord = response.json().await?;

        if !record.is_admin {
            warn!(user_id = %record.id, "login rejected: account is not an admin");
            return Err(AppError::AccessDenied);
        }

        let user = map_user(&record);
        self.session().sign_in(user.clone()).await;

        info!(user_id = %user.id, "admin signed in");
        Ok(user)
    }

    pub async fn logout(&self) {
        self.session().sign_out().await;
        info!("admin signed out");
    }
}
