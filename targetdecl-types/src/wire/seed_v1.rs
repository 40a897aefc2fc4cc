use crate::context::InvocationContext;
use crate::seed::DependencySeed;
use serde::{Deserialize, Serialize};

/// Wire form of a dependency seed (`targetdecl.seed.v1`).
///
/// Carries the invocation identity alongside the module sequence so an
/// orchestrator log can attribute the seed to one build run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV1 {
    pub schema: String,
    pub target: String,
    pub platform: String,
    pub configuration: String,
    pub modules: Vec<String>,
}

impl SeedV1 {
    pub fn new(seed: &DependencySeed, ctx: &InvocationContext) -> Self {
        Self {
            schema: crate::schema::TARGETDECL_SEED_V1.to_string(),
            target: seed.target().to_string(),
            platform: ctx.platform.clone(),
            configuration: ctx.configuration.clone(),
            modules: seed
                .modules()
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SettingsVersion, TargetCategory, TargetDefinition, TargetRecord};

    #[test]
    fn seed_wire_carries_invocation_identity() {
        let mut def = TargetDefinition::new("Raider", TargetCategory::Game, SettingsVersion::V2);
        def.extra_modules = vec!["CoreGame".to_string()];
        let ctx = InvocationContext::new("linux", "shipping");
        let record = TargetRecord::from_definition(&def, &ctx).expect("valid record");
        let seed = DependencySeed::for_record(&record);

        let wire = SeedV1::new(&seed, &ctx);
        assert_eq!(wire.schema, crate::schema::TARGETDECL_SEED_V1);
        assert_eq!(wire.target, "Raider");
        assert_eq!(wire.platform, "linux");
        assert_eq!(wire.configuration, "shipping");
        assert_eq!(wire.modules, vec!["Raider", "CoreGame"]);
    }
}
