//! API models for request and response payloads

pub mod admin;
pub mod contact;
pub mod pagination;
pub mod project;
pub mod skill;

// Re-export for convenience
pub use admin::{
    AdminAccount, AdminProfile, AdminSummary, ChangePasswordRequest, LoginRequest, LoginResponse,
    NewAdmin, ProfileUpdate, UpdateProfileRequest,
};
pub use contact::{ContactListResponse, ContactMessage, ContactRequest, NewContactMessage};
pub use pagination::{PageQuery, PageRequest, Pagination};
pub use project::{NewProject, Project, ProjectRequest};
pub use skill::{NewSkill, Skill, SkillEntry, SkillRequest, group_by_category};
