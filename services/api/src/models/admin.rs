//! Administrator account model and the payloads of the admin endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{non_blank, require_all, validate_password};

/// Administrator record as stored, including the password hash.
///
/// Never serialized; responses use [`AdminSummary`] or [`AdminProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct AdminAccount {
    pub id: u64,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection returned alongside a fresh session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<&AdminAccount> for AdminSummary {
    fn from(admin: &AdminAccount) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            title: admin.title.clone(),
            avatar_url: admin.avatar_url.clone(),
        }
    }
}

/// Full profile shown on the admin profile page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AdminAccount> for AdminProfile {
    fn from(admin: AdminAccount) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            title: admin.title,
            bio: admin.bio,
            phone: admin.phone,
            location: admin.location,
            avatar_url: admin.avatar_url,
            created_at: admin.created_at,
        }
    }
}

/// New administrator, created from the operator CLI
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub title: Option<String>,
}

/// Admin login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub admin: AdminSummary,
}

/// Profile update payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

/// Validated profile fields; blank optional fields become NULL
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(self) -> Result<ProfileUpdate, String> {
        require_all(&[&self.name], "Name is required")?;

        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            title: non_blank(self.title),
            bio: non_blank(self.bio),
            phone: non_blank(self.phone),
            location: non_blank(self.location),
            avatar_url: non_blank(self.avatar_url),
        })
    }
}

/// Password change payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl ChangePasswordRequest {
    /// Check presence, confirmation and strength before touching storage
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("All fields are required".to_string());
        }

        if self.new_password != self.confirm_password {
            return Err("New passwords do not match".to_string());
        }

        validate_password(&self.new_password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(current: &str, new: &str, confirm: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn profile_update_requires_name() {
        let request = UpdateProfileRequest {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate(), Err("Name is required".to_string()));
    }

    #[test]
    fn profile_update_nulls_blank_fields() {
        let request = UpdateProfileRequest {
            name: "Usman".to_string(),
            title: Some("".to_string()),
            bio: Some("Builds things".to_string()),
            ..Default::default()
        };

        let update = request.validate().unwrap();
        assert_eq!(update.name, "Usman");
        assert_eq!(update.title, None);
        assert_eq!(update.bio.as_deref(), Some("Builds things"));
        assert_eq!(update.phone, None);
    }

    #[test]
    fn change_password_rules() {
        assert_eq!(
            change("", "secret1", "secret1").validate(),
            Err("All fields are required".to_string())
        );
        assert_eq!(
            change("old-pass", "secret1", "secret2").validate(),
            Err("New passwords do not match".to_string())
        );
        assert!(change("old-pass", "short", "short").validate().is_err());
        assert!(change("old-pass", "secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn change_password_reads_camel_case_fields() {
        let request: ChangePasswordRequest = serde_json::from_str(
            r#"{"currentPassword":"a","newPassword":"b","confirmPassword":"c"}"#,
        )
        .unwrap();
        assert_eq!(request.current_password, "a");
        assert_eq!(request.new_password, "b");
        assert_eq!(request.confirm_password, "c");
    }
}
