//! Loading of `targets.toml` declaration manifests.
//!
//! The loader is *tolerant*: unknown fields are ignored and optional fields
//! may be absent. Strict validation happens later, at record construction;
//! a manifest that parses is not yet a manifest whose targets all construct.

mod load;

pub use load::{
    MANIFEST_FILE_NAME, Manifest, ManifestError, discover_manifest, load_manifest, load_or_default,
    parse_manifest,
};
