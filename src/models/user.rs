//! User model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Picture reference assigned at registration.
pub const DEFAULT_PROFILE_PICTURE: &str = "/media/avatars/default.png";

/// Stored user record.
///
/// The password is kept in plain text. This store is a development mock and
/// must be replaced wholesale, not hardened, before holding real accounts.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    /// Height in centimeters (0 when unknown)
    pub height: f64,
    /// Weight in kilograms (0 when unknown)
    pub weight: f64,
    pub profile_picture_url: String,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            user_id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn profile(&self) -> Profile {
        Profile {
            user_id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            height: self.height,
            weight: self.weight,
            profile_picture_url: self.profile_picture_url.clone(),
        }
    }
}

/// Identity returned by register/login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicUser {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    pub full_name: String,
    pub email: String,
}

/// Full profile (everything but the password).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub height: f64,
    pub weight: f64,
    pub profile_picture_url: String,
}

/// Registration form. Every field is optional on the wire so that missing
/// values surface as `MissingFields` instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub date_of_birth: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Partial profile update. Email and date of birth are not accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl ProfileUpdate {
    /// Apply the provided fields; an empty name leaves the current one.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.full_name.filter(|n| !n.trim().is_empty()) {
            user.full_name = name;
        }
        if let Some(height) = self.height {
            user.height = height;
        }
        if let Some(weight) = self.weight {
            user.weight = weight;
        }
    }
}

/// Session issued by register/login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user_id: u64,
    pub user: PublicUser,
}

/// Free-form per-user settings (e.g. `theme`).
pub type Preferences = serde_json::Map<String, serde_json::Value>;

/// Preferences every new account starts with.
pub fn default_preferences() -> Preferences {
    let mut prefs = Preferences::new();
    prefs.insert("theme".to_string(), serde_json::Value::from("light"));
    prefs
}
