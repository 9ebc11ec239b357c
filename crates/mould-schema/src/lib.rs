//! # mould-schema
//!
//! Field descriptors and record schemas for Mould.
//!
//! This crate provides:
//! - `FieldDescriptor`: the normalized validation rule for one field
//! - `RecordSchema`: the frozen mapping from field name to descriptor, with
//!   the filter / default / validate steps used to build records
//! - `Accessor`: the read-only property generated for each present field
//!
//! ## Raw definitions
//!
//! Shapes can be declared with typed builders or as raw `Value` objects whose
//! per-field rules use exactly the keys `type`, `required`, `enumerable` and
//! `default`. Raw definitions are checked strictly: unknown keys, unknown type
//! tags and non-unary predicates are construction errors.

mod accessor;
mod descriptor;
mod error;
mod schema;

pub use accessor::Accessor;
pub use descriptor::{FieldDescriptor, FieldDescriptorBuilder, TypeRule};
pub use error::SchemaError;
pub use schema::RecordSchema;
