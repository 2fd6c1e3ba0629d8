//! Ministry site backend: contact inquiries, FAQs and gallery over a small JSON API,
//! plus a typed client for it.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use client::{ClientError, SiteClient};
pub use config::SiteConfig;
pub use error::{AppError, ConfigError, ValidationError};
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes, site_router};
pub use service::{seed_defaults, spawn_seeding, SeedReport, Validated};
pub use state::AppState;
pub use store::{ensure_database_exists, MemStorage, PgStorage, Storage};
