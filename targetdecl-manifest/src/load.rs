use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use targetdecl_registry::TargetRegistry;
use targetdecl_types::{ConfigurationError, TargetDefinition};
use thiserror::Error;
use tracing::debug;

/// The manifest file name to search for.
pub const MANIFEST_FILE_NAME: &str = "targets.toml";

/// A parsed declaration manifest.
///
/// Declaration order is file order and is preserved into each target's
/// module list; target uniqueness is checked when the manifest is turned
/// into a registry, not at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Schema tag, e.g. "targetdecl.manifest.v1". Optional; mismatches are
    /// logged, not fatal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "target", skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<TargetDefinition>,
}

impl Manifest {
    /// Folds the declarations into a registry, rejecting duplicate names.
    pub fn into_registry(self) -> Result<TargetRegistry, ConfigurationError> {
        TargetRegistry::from_definitions(self.targets)
    }
}

#[derive(Debug, Error, Clone)]
pub enum ManifestError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("toml parse error: {message}")]
    Toml { message: String },
}

/// Discover `targets.toml` in the project root.
pub fn discover_manifest(project_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let manifest_path = project_root.join(MANIFEST_FILE_NAME);
    if manifest_path.exists() {
        debug!("found manifest at {}", manifest_path);
        Some(manifest_path)
    } else {
        debug!("no manifest found at {}", manifest_path);
        None
    }
}

/// Load and parse a declaration manifest.
pub fn load_manifest(path: &Utf8Path) -> Result<Manifest, ManifestError> {
    let contents = fs::read_to_string(path).map_err(|e| ManifestError::Io {
        message: e.to_string(),
    })?;
    let manifest = parse_manifest(&contents)?;

    if let Some(schema) = &manifest.schema
        && schema != targetdecl_types::schema::TARGETDECL_MANIFEST_V1
    {
        debug!(schema = %schema, "manifest carries an unexpected schema tag");
    }

    Ok(manifest)
}

/// Parse a manifest from a string.
pub fn parse_manifest(contents: &str) -> Result<Manifest, ManifestError> {
    toml::from_str(contents).map_err(|e| ManifestError::Toml {
        message: e.to_string(),
    })
}

/// Convenience for callers that treat a missing manifest as empty.
pub fn load_or_default(project_root: &Utf8Path) -> anyhow::Result<Manifest> {
    match discover_manifest(project_root) {
        Some(path) => {
            load_manifest(&path).with_context(|| format!("load manifest {}", path))
        }
        None => Ok(Manifest::default()),
    }
}
