use crate::record::{SettingsVersion, TargetCategory, TargetDefinition, TargetRecord};
use crate::wire::WireError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Wire form of a validated target record (`targetdecl.record.v1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordV1 {
    pub schema: String,
    pub name: String,
    pub category: TargetCategory,
    pub settings_version: SettingsVersion,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_modules: Vec<String>,
}

impl From<&TargetRecord> for RecordV1 {
    fn from(record: &TargetRecord) -> Self {
        Self {
            schema: crate::schema::TARGETDECL_RECORD_V1.to_string(),
            name: record.name().to_string(),
            category: record.category(),
            settings_version: record.settings_version(),
            extra_modules: record
                .extra_modules()
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

impl TryFrom<RecordV1> for TargetRecord {
    type Error = WireError;

    /// Re-runs full record validation; a wire record that would not construct
    /// cleanly is rejected rather than smuggled past the invariants.
    fn try_from(wire: RecordV1) -> Result<Self, Self::Error> {
        if wire.schema != crate::schema::TARGETDECL_RECORD_V1 {
            return Err(WireError::SchemaMismatch {
                expected: crate::schema::TARGETDECL_RECORD_V1,
                found: wire.schema,
            });
        }
        let def = TargetDefinition {
            name: wire.name,
            category: Some(wire.category),
            settings_version: Some(wire.settings_version),
            extra_modules: wire.extra_modules,
        };
        Ok(TargetRecord::validate(&def)?)
    }
}

/// Stable content fingerprint of a record: sha256 over its canonical wire
/// serialization. Two records constructed from the same declaration always
/// fingerprint identically.
pub fn record_fingerprint(record: &TargetRecord) -> String {
    let wire = RecordV1::from(record);
    let s = serde_json::to_string(&wire).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}
