//! # mould-core
//!
//! Dynamic value model shared by all Mould crates.
//!
//! This crate provides:
//! - `Value`: the dynamically-typed values stored in records
//! - `Kind`: the primitive type tags used for simple type matching
//! - `Map`: an insertion-ordered, string-keyed mapping
//! - `Function` and `Symbol`: reference-like values with identity
//! - JSON-like rendering for display and error messages
//! - Cross-cutting error types

pub mod errors;
pub mod function;
pub mod kind;
pub mod map;
pub mod render;
pub mod symbol;
pub mod value;

pub use errors::CoreError;
pub use function::Function;
pub use kind::Kind;
pub use map::Map;
pub use symbol::Symbol;
pub use value::Value;
