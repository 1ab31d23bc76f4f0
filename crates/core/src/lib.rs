//! `krishi-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult, FieldViolation, InvalidInput};
pub use value_object::ValueObject;
