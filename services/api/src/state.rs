//! Application state shared across handlers

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::{
    auth::AuthService,
    jwt::JwtService,
    repositories::{
        AdminRepository, AdminStore, ContactRepository, ContactStore, ProjectRepository,
        ProjectStore, SkillRepository, SkillStore,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub admin_repository: Arc<dyn AdminStore>,
    pub contact_repository: Arc<dyn ContactStore>,
    pub project_repository: Arc<dyn ProjectStore>,
    pub skill_repository: Arc<dyn SkillStore>,
}

impl AppState {
    /// Wire the MySQL repositories onto a shared pool
    pub fn with_pool(pool: MySqlPool, jwt_service: JwtService) -> Self {
        Self::new(
            Arc::new(AdminRepository::new(pool.clone())),
            Arc::new(ContactRepository::new(pool.clone())),
            Arc::new(ProjectRepository::new(pool.clone())),
            Arc::new(SkillRepository::new(pool)),
            jwt_service,
        )
    }

    pub fn new(
        admin_repository: Arc<dyn AdminStore>,
        contact_repository: Arc<dyn ContactStore>,
        project_repository: Arc<dyn ProjectStore>,
        skill_repository: Arc<dyn SkillStore>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            auth_service: AuthService::new(admin_repository.clone(), jwt_service),
            admin_repository,
            contact_repository,
            project_repository,
            skill_repository,
        }
    }
}
