//! Revize Inspection Management System
//!
//! A Rust implementation of the Revize lifting-equipment inspection server,
//! providing a REST JSON API for customers, equipment, revision records and
//! PDF revision reports per NV 193/2022 Sb.

use std::sync::Arc;

pub mod api;
pub mod checklist;
pub mod config;
pub mod error;
pub mod models;
pub mod pdf;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
