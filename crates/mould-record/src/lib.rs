//! # mould-record
//!
//! Schema-validated immutable records for Mould.
//!
//! This crate provides:
//! - `create_record_type` / `RecordFactory`: declare a record type from a shape
//! - `RecordType`: the named, frozen shape that constructs records
//! - `Record`: an immutable instance with read-only properties and
//!   copy-on-write `set` / `remove` / `update`
//! - `RecordError`: construction and update failures
//!
//! # Usage
//!
//! ```
//! use mould_core::{Function, Value};
//! use mould_record::create_record_type;
//!
//! let big = Function::predicate("big", |v| v.as_f64().is_some_and(|n| n > 5.0));
//! let shape = Value::object([
//!     ("a", Value::object([("default", Value::from("A"))])),
//!     ("b", Value::object([("type", Value::from("number"))])),
//!     ("c", Value::object([("type", Value::from(big))])),
//! ]);
//!
//! let sample = create_record_type(&shape, Some("Sample")).unwrap();
//! let record = sample.create(&Value::object([("c", Value::from(6))])).unwrap();
//! assert_eq!(record.to_string(), r#"{"a":"A","c":6}"#);
//!
//! let next = record.set("b", 3).unwrap();
//! assert_eq!(next.to_string(), r#"{"a":"A","b":3,"c":6}"#);
//! assert!(record.set("b", "x").is_err());
//! ```

mod error;
mod factory;
mod record;
mod record_type;

pub use error::RecordError;
pub use factory::{FactoryOptions, RecordFactory, create_record_type};
pub use record::Record;
pub use record_type::RecordType;
