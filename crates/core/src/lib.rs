//! `sangam-core` — domain foundation building blocks for the catalogue.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, Slug, TestimonialId};
pub use money::{Rupees, group_indian};
pub use value_object::ValueObject;
