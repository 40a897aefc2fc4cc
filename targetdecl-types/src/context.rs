use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The build invocation context supplied by the orchestrator.
///
/// One context describes one build run: the platform being targeted, the
/// requested build configuration, and any extra host-environment parameters.
/// Record construction borrows the context and never mutates it; records also
/// never derive their fields from it, so two constructions of the same
/// declaration under different contexts yield equal records.
///
/// The context is hashable so it can key a per-invocation record cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationContext {
    /// Platform identifier, e.g. "win64" or "linux". Opaque to this crate.
    pub platform: String,

    /// Requested build configuration, e.g. "development" or "shipping".
    pub configuration: String,

    /// Extra host-environment parameters, ordered for determinism.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl InvocationContext {
    pub fn new(platform: impl Into<String>, configuration: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            configuration: configuration.into(),
            params: BTreeMap::new(),
        }
    }
}
