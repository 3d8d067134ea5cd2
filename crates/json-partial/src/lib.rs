//! Presence-aware JSON decoding for partial updates.
//!
//! A plain decoded struct cannot tell `{"age": 0}` apart from `{}`: both
//! leave `age` at zero. [`Field`] records whether the key was actually
//! present in the document, which is what a PATCH handler needs to
//! distinguish "set this to zero" from "leave this unchanged".
//!
//! ```
//! use json_partial::Field;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct UserPatch {
//!     #[serde(default)]
//!     name: Field<String>,
//!     #[serde(default)]
//!     age: Field<i64>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"age": 0}"#).unwrap();
//! assert!(patch.age.valid);
//! assert_eq!(patch.age.value, 0);
//! assert!(!patch.name.valid);
//! ```
//!
//! Every `Field` member of a deserialized struct must carry
//! `#[serde(default)]`: that is what lets serde skip an absent key entirely,
//! leaving the field in its absent state instead of erroring. Serialization
//! always emits the wrapped value; see [`Field::is_absent`] for producing
//! merge-patch style output that omits unset keys.

pub mod error;
pub mod field;

pub use error::FieldError;
pub use field::Field;
