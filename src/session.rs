use secrecy::SecretString;
use tokio::sync::RwLock;

use crate::models::user::AdminUser;

#[derive(Debug, Clone)]
struct SignedIn {
    user: AdminUser,
    token: Option<SecretString>,
}

/// Holds the signed-in admin for the lifetime of a console session. Shared
/// with the remote client through an `Arc`.
#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<Option<SignedIn>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whoever was signed in. Any token from the previous sign-in is
    /// dropped.
    pub async fn sign_in(&self, user: AdminUser) {
        *self.inner.write().await = Some(SignedIn { user, token: None });
    }

    /// Stores a bearer token for subsequent requests. Ignored while signed out.
    pub async fn set_token(&self, token: impl Into<String>) {
        if let Some(signed_in) = self.inner.write().await.as_mut() {
            signed_in.token = Some(SecretString::from(token.into()));
        }
    }

    pub async fn sign_out(&self) {
        *self.inner.write().await = None;
    }

    pub async fn user(&self) -> Option<AdminUser> {
        self.inner.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn token(&self) -> Option<SecretString> {
        self.inner
            .read()
            .await
            .as_ref()
            .and_then(|s| s.token.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
