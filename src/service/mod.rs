//! Request validation and startup seeding.

pub mod seed;
pub mod validation;
pub use seed::{seed_defaults, spawn_seeding, SeedReport};
pub use validation::{EntitySchema, FieldKind, RequestValidator, Validated, ValidationRule};
