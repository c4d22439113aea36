//! Contact message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::pagination::Pagination;
use crate::validation::{require_all, validate_email, validate_message};

/// Message left by a visitor through the contact form
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(self) -> Result<NewContactMessage, String> {
        require_all(
            &[&self.name, &self.email, &self.message],
            "All fields are required",
        )?;

        let email = self.email.trim().to_string();
        validate_email(&email)?;
        validate_message(&self.message)?;

        Ok(NewContactMessage {
            name: self.name.trim().to_string(),
            email,
            message: self.message.trim().to_string(),
        })
    }
}

/// Page of contact messages for the admin inbox
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactMessage>,
    pub pagination: Pagination,
}
