use thiserror::Error;

/// Raised when a target declaration violates a construction invariant.
///
/// Always fatal to the build invocation that produced it: a partially-valid
/// target record has no safe degraded mode, and construction is pure, so
/// retrying with the same declaration reproduces the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("target declaration is missing a name")]
    MissingTargetName,

    #[error("target `{target}`: category is not set")]
    MissingCategory { target: String },

    #[error("target `{target}`: settings version is not set")]
    MissingSettingsVersion { target: String },

    #[error("target `{target}`: extra module at position {position} is empty")]
    EmptyModuleName { target: String, position: usize },

    #[error("target `{target}`: duplicate extra module `{module}`")]
    DuplicateModule { target: String, module: String },

    #[error("duplicate target declaration `{target}`")]
    DuplicateTarget { target: String },
}

impl ConfigurationError {
    /// The identity of the offending target, if the declaration had one.
    pub fn target(&self) -> Option<&str> {
        match self {
            ConfigurationError::MissingTargetName => None,
            ConfigurationError::MissingCategory { target }
            | ConfigurationError::MissingSettingsVersion { target }
            | ConfigurationError::EmptyModuleName { target, .. }
            | ConfigurationError::DuplicateModule { target, .. }
            | ConfigurationError::DuplicateTarget { target } => Some(target),
        }
    }
}

/// A raw module identifier was empty or whitespace-only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("module name is empty")]
pub struct InvalidModuleName;

#[cfg(test)]
mod tests {
    use super::ConfigurationError;

    #[test]
    fn display_names_target_and_invariant() {
        let err = ConfigurationError::DuplicateModule {
            target: "Raider".to_string(),
            module: "RaiderCore".to_string(),
        };
        assert!(err.to_string().contains("Raider"));
        assert!(err.to_string().contains("duplicate extra module"));
        assert_eq!(err.target(), Some("Raider"));
    }

    #[test]
    fn missing_name_has_no_target_identity() {
        assert_eq!(ConfigurationError::MissingTargetName.target(), None);
    }
}
