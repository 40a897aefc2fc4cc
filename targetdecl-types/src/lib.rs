//! Shared value types for the targetdecl workspace.
//!
//! # Design constraints
//! - A `TargetRecord` is constructed once, validated, and never mutated.
//! - Readers get borrowed views; nothing here owns resources or does I/O.
//! - Wire representations are versioned; prefer adding a new schema over
//!   changing the meaning of an existing one.

mod context;
mod error;
mod record;
mod seed;
pub mod wire;

pub use context::InvocationContext;
pub use error::{ConfigurationError, InvalidModuleName};
pub use record::{ModuleName, SettingsVersion, TargetCategory, TargetDefinition, TargetRecord};
pub use seed::DependencySeed;

/// Schema identifiers.
pub mod schema {
    pub const TARGETDECL_RECORD_V1: &str = "targetdecl.record.v1";
    pub const TARGETDECL_SEED_V1: &str = "targetdecl.seed.v1";
    pub const TARGETDECL_MANIFEST_V1: &str = "targetdecl.manifest.v1";
}
