//! Schema-exact wire representations.
//!
//! Internal types stay free to evolve; these structs are frozen per schema
//! version and converted to/from explicitly.

use thiserror::Error;

pub mod record_v1;
pub mod seed_v1;

pub use record_v1::{RecordV1, record_fingerprint};
pub use seed_v1::SeedV1;

/// Errors emitted while converting wire models to internal models.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected schema `{found}`, expected `{expected}`")]
    SchemaMismatch {
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Invalid(#[from] crate::ConfigurationError),
}
