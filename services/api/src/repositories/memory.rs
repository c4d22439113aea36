//! In-memory store mirroring the MySQL repositories' ordering rules

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{
    AdminAccount, ContactMessage, NewAdmin, NewContactMessage, NewProject, NewSkill, PageRequest,
    ProfileUpdate, Project, Skill,
};
use crate::repositories::{AdminStore, ContactStore, ProjectStore, SkillStore};

#[derive(Default)]
struct Tables {
    next_id: u64,
    admins: Vec<AdminAccount>,
    contacts: Vec<ContactMessage>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
}

impl Tables {
    /// Ids and timestamps both increase strictly with every insert
    fn stamp(&mut self) -> (u64, DateTime<Utc>) {
        self.next_id += 1;
        let created_at = DateTime::from_timestamp(self.next_id as i64, 0).unwrap_or_default();
        (self.next_id, created_at)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().expect("memory store poisoned");
        f(&mut tables)
    }

    pub fn contact_count(&self) -> usize {
        self.with(|t| t.contacts.len())
    }

    pub fn project_count(&self) -> usize {
        self.with(|t| t.projects.len())
    }

    pub fn skill_count(&self) -> usize {
        self.with(|t| t.skills.len())
    }
}

fn newest_first<T>(rows: &[T], key: impl Fn(&T) -> (DateTime<Utc>, u64)) -> Vec<T>
where
    T: Clone,
{
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>> {
        Ok(self.with(|t| t.admins.iter().find(|a| a.email == email).cloned()))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<AdminAccount>> {
        Ok(self.with(|t| t.admins.iter().find(|a| a.id == id).cloned()))
    }

    async fn create(&self, admin: &NewAdmin) -> Result<u64> {
        self.with(|t| {
            if t.admins.iter().any(|a| a.email == admin.email) {
                anyhow::bail!("Duplicate entry '{}' for key 'uq_admin_users_email'", admin.email);
            }
            let (id, created_at) = t.stamp();
            t.admins.push(AdminAccount {
                id,
                email: admin.email.clone(),
                password_hash: admin.password_hash.clone(),
                name: admin.name.clone(),
                title: admin.title.clone(),
                bio: None,
                phone: None,
                location: None,
                avatar_url: None,
                created_at,
            });
            Ok(id)
        })
    }

    async fn update_profile(&self, id: u64, profile: &ProfileUpdate) -> Result<bool> {
        Ok(self.with(|t| match t.admins.iter_mut().find(|a| a.id == id) {
            Some(admin) => {
                admin.name = profile.name.clone();
                admin.title = profile.title.clone();
                admin.bio = profile.bio.clone();
                admin.phone = profile.phone.clone();
                admin.location = profile.location.clone();
                admin.avatar_url = profile.avatar_url.clone();
                true
            }
            None => false,
        }))
    }

    async fn update_password(&self, id: u64, password_hash: &str) -> Result<bool> {
        Ok(self.with(|t| match t.admins.iter_mut().find(|a| a.id == id) {
            Some(admin) => {
                admin.password_hash = password_hash.to_string();
                true
            }
            None => false,
        }))
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn create(&self, message: &NewContactMessage) -> Result<u64> {
        Ok(self.with(|t| {
            let (id, created_at) = t.stamp();
            t.contacts.push(ContactMessage {
                id,
                name: message.name.clone(),
                email: message.email.clone(),
                message: message.message.clone(),
                created_at,
            });
            id
        }))
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>> {
        Ok(self.with(|t| newest_first(&t.contacts, |c| (c.created_at, c.id))))
    }

    async fn list_page(&self, page: PageRequest) -> Result<(Vec<ContactMessage>, u64)> {
        Ok(self.with(|t| {
            let all = newest_first(&t.contacts, |c| (c.created_at, c.id));
            let total = all.len() as u64;
            let rows = all
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit as usize)
                .collect();
            (rows, total)
        }))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.with(|t| {
            let before = t.contacts.len();
            t.contacts.retain(|c| c.id != id);
            t.contacts.len() < before
        }))
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Project>> {
        Ok(self.with(|t| newest_first(&t.projects, |p| (p.created_at, p.id))))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Project>> {
        Ok(self.with(|t| t.projects.iter().find(|p| p.id == id).cloned()))
    }

    async fn create(&self, project: &NewProject) -> Result<u64> {
        Ok(self.with(|t| {
            let (id, created_at) = t.stamp();
            t.projects.push(Project {
                id,
                title: project.title.clone(),
                description: project.description.clone(),
                technologies: project.technologies.clone(),
                link: project.link.clone(),
                icon: project.icon.clone(),
                created_at,
            });
            id
        }))
    }

    async fn update(&self, id: u64, project: &NewProject) -> Result<bool> {
        Ok(self.with(|t| match t.projects.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.title = project.title.clone();
                existing.description = project.description.clone();
                existing.technologies = project.technologies.clone();
                existing.link = project.link.clone();
                existing.icon = project.icon.clone();
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.with(|t| {
            let before = t.projects.len();
            t.projects.retain(|p| p.id != id);
            t.projects.len() < before
        }))
    }
}

#[async_trait]
impl SkillStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Skill>> {
        Ok(self.with(|t| {
            let mut skills = t.skills.clone();
            skills.sort_by(|a, b| (&a.category, &a.name, a.id).cmp(&(&b.category, &b.name, b.id)));
            skills
        }))
    }

    async fn create(&self, skill: &NewSkill) -> Result<u64> {
        Ok(self.with(|t| {
            let (id, created_at) = t.stamp();
            t.skills.push(Skill {
                id,
                category: skill.category.clone(),
                name: skill.name.clone(),
                proficiency: skill.proficiency,
                created_at,
            });
            id
        }))
    }

    async fn update(&self, id: u64, skill: &NewSkill) -> Result<bool> {
        Ok(self.with(|t| match t.skills.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                existing.category = skill.category.clone();
                existing.name = skill.name.clone();
                existing.proficiency = skill.proficiency;
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.with(|t| {
            let before = t.skills.len();
            t.skills.retain(|s| s.id != id);
            t.skills.len() < before
        }))
    }
}
