//! Repositories for database operations
//!
//! Each table sits behind a small async trait so the HTTP layer can be
//! driven against MySQL in production and an in-memory store in tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{
    AdminAccount, ContactMessage, NewAdmin, NewContactMessage, NewProject, NewSkill, PageRequest,
    ProfileUpdate, Project, Skill,
};

pub mod admin;
pub mod contact;
#[cfg(test)]
pub mod memory;
pub mod project;
pub mod skill;

pub use admin::AdminRepository;
pub use contact::ContactRepository;
pub use project::ProjectRepository;
pub use skill::SkillRepository;

/// Administrator accounts
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Exact, case-sensitive email lookup; the MySQL column uses `utf8mb4_bin`
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>>;

    async fn find_by_id(&self, id: u64) -> Result<Option<AdminAccount>>;

    /// Insert an admin and return its id
    async fn create(&self, admin: &NewAdmin) -> Result<u64>;

    /// Overwrite the profile fields; returns false when no admin has `id`
    async fn update_profile(&self, id: u64, profile: &ProfileUpdate) -> Result<bool>;

    /// Replace the stored password hash; returns false when no admin has `id`
    async fn update_password(&self, id: u64, password_hash: &str) -> Result<bool>;
}

/// Messages submitted through the contact form
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Insert a message and return its id
    async fn create(&self, message: &NewContactMessage) -> Result<u64>;

    /// Every message, newest first
    async fn list_all(&self) -> Result<Vec<ContactMessage>>;

    /// One page of messages, newest first, with the total row count
    async fn list_page(&self, page: PageRequest) -> Result<(Vec<ContactMessage>, u64)>;

    /// Returns false when no message has `id`
    async fn delete(&self, id: u64) -> Result<bool>;
}

/// Portfolio projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every project, newest first
    async fn list(&self) -> Result<Vec<Project>>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Project>>;

    async fn create(&self, project: &NewProject) -> Result<u64>;

    /// Returns false when no project has `id`
    async fn update(&self, id: u64, project: &NewProject) -> Result<bool>;

    /// Returns false when no project has `id`
    async fn delete(&self, id: u64) -> Result<bool>;
}

/// Skills shown on the public site
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Every skill ordered by category, then name
    async fn list(&self) -> Result<Vec<Skill>>;

    async fn create(&self, skill: &NewSkill) -> Result<u64>;

    /// Returns false when no skill has `id`
    async fn update(&self, id: u64, skill: &NewSkill) -> Result<bool>;

    /// Returns false when no skill has `id`
    async fn delete(&self, id: u64) -> Result<bool>;
}
