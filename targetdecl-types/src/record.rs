use crate::context::InvocationContext;
use crate::error::{ConfigurationError, InvalidModuleName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The kind of binary a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCategory {
    Game,
    Editor,
    Client,
    Server,
    Program,
}

impl TargetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetCategory::Game => "game",
            TargetCategory::Editor => "editor",
            TargetCategory::Client => "client",
            TargetCategory::Server => "server",
            TargetCategory::Program => "program",
        }
    }
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which generation of default compilation/link settings the orchestrator
/// applies before this record's overrides.
///
/// Declarations pin a version explicitly so that evolving default-settings
/// policy never silently changes behavior for records written against an
/// older baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsVersion {
    V1,
    V2,
}

impl SettingsVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsVersion::V1 => "v1",
            SettingsVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for SettingsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated logical module identifier.
///
/// The wrapped string is exactly the identifier the orchestrator uses for
/// name-based module lookup; no path or version is encoded here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidModuleName> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidModuleName);
        }
        Ok(Self(raw))
    }

    /// Wraps a string already known to be non-blank.
    pub(crate) fn from_validated(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleName {
    type Error = InvalidModuleName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ModuleName::new(raw)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> String {
        name.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The declaration-time constants of one build target.
///
/// This is the loose shape: category and settings version may still be unset,
/// and module names are raw strings. Manifests and embedded declarations both
/// deserialize into it; `TargetRecord::from_definition` turns it into the
/// strict record or fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TargetCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_version: Option<SettingsVersion>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_modules: Vec<String>,
}

impl TargetDefinition {
    pub fn new(
        name: impl Into<String>,
        category: TargetCategory,
        settings_version: SettingsVersion,
    ) -> Self {
        Self {
            name: name.into(),
            category: Some(category),
            settings_version: Some(settings_version),
            extra_modules: Vec::new(),
        }
    }
}

/// A validated, immutable description of one build target.
///
/// Constructed once per build invocation via [`TargetRecord::from_definition`],
/// read any number of times, and discarded when the invocation ends. There is
/// no way to observe a partially-constructed or mutated record: all fields are
/// private and every accessor returns a borrowed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRecord {
    name: String,
    category: TargetCategory,
    settings_version: SettingsVersion,
    extra_modules: Vec<ModuleName>,
}

impl TargetRecord {
    /// Validates a declaration against a build invocation context.
    ///
    /// The context is borrowed per the orchestrator's construction protocol
    /// but never feeds record fields: category, settings version, and extra
    /// modules are fixed declaration-time constants. No I/O, no logging.
    pub fn from_definition(
        def: &TargetDefinition,
        _ctx: &InvocationContext,
    ) -> Result<Self, ConfigurationError> {
        Self::validate(def)
    }

    pub(crate) fn validate(def: &TargetDefinition) -> Result<Self, ConfigurationError> {
        if def.name.trim().is_empty() {
            return Err(ConfigurationError::MissingTargetName);
        }
        let name = def.name.clone();

        let category = def.category.ok_or_else(|| ConfigurationError::MissingCategory {
            target: name.clone(),
        })?;
        let settings_version =
            def.settings_version
                .ok_or_else(|| ConfigurationError::MissingSettingsVersion {
                    target: name.clone(),
                })?;

        let mut extra_modules = Vec::with_capacity(def.extra_modules.len());
        let mut seen = HashSet::new();
        for (position, raw) in def.extra_modules.iter().enumerate() {
            let module =
                ModuleName::new(raw.clone()).map_err(|_| ConfigurationError::EmptyModuleName {
                    target: name.clone(),
                    position,
                })?;
            if !seen.insert(module.clone()) {
                return Err(ConfigurationError::DuplicateModule {
                    target: name.clone(),
                    module: module.as_str().to_string(),
                });
            }
            extra_modules.push(module);
        }

        Ok(Self {
            name,
            category,
            settings_version,
            extra_modules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> TargetCategory {
        self.category
    }

    pub fn settings_version(&self) -> SettingsVersion {
        self.settings_version
    }

    /// The additional modules this target folds into its dependency graph,
    /// in declaration order. Read-only view; the record cannot be mutated
    /// through it.
    pub fn extra_modules(&self) -> &[ModuleName] {
        &self.extra_modules
    }
}
