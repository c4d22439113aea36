//! Portfolio backend API
//!
//! Serves the public portfolio content (projects, skills, contact form) and
//! the token-guarded admin panel endpoints under `/api`.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
