use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Body of `POST /users/login`. The backend reads the identifier from `phone`
/// whether it is a phone number or an email.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub phone: String,
    pub password: SecretString,
}

impl Serialize for LoginRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("LoginRequest", 2)?;
        body.serialize_field("phone", &self.phone)?;
        body.serialize_field("password", self.password.expose_secret())?;
        body.end()
    }
}

/// User record returned by `POST /users/login`. The password hash in the
/// response is never read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RemoteUserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "pendingPayment", default, deserialize_with = "null_as_default")]
    pub pending_payment: f64,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "isRider", default)]
    pub is_rider: bool,
    #[serde(rename = "onDuty", default)]
    pub on_duty: bool,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pending_payment: f64,
    pub is_admin: bool,
    pub is_rider: bool,
    pub on_duty: bool,
    pub created_at: Option<DateTime<Utc>>,
}
