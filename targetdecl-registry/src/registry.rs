use std::collections::BTreeMap;
use targetdecl_types::{ConfigurationError, InvocationContext, TargetDefinition, TargetRecord};
use thiserror::Error;

/// Errors from registry lookups and construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown target `{target}`")]
    UnknownTarget { target: String },

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

/// The set of targets one project declares.
///
/// Target names are unique; iteration order is deterministic (sorted by
/// name). Registration stores declarations as-is; validation happens per
/// invocation when a record is constructed, so one malformed target does not
/// prevent inspecting the others.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: BTreeMap<String, TargetDefinition>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: TargetDefinition) -> Result<(), ConfigurationError> {
        if def.name.trim().is_empty() {
            return Err(ConfigurationError::MissingTargetName);
        }
        if self.targets.contains_key(&def.name) {
            return Err(ConfigurationError::DuplicateTarget {
                target: def.name.clone(),
            });
        }
        self.targets.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn from_definitions(
        defs: impl IntoIterator<Item = TargetDefinition>,
    ) -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&TargetDefinition> {
        self.targets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &TargetDefinition> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Runs the factory construction protocol for one declared target.
    pub fn construct(
        &self,
        name: &str,
        ctx: &InvocationContext,
    ) -> Result<TargetRecord, RegistryError> {
        let def = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTarget {
                target: name.to_string(),
            })?;
        Ok(TargetRecord::from_definition(def, ctx)?)
    }
}
