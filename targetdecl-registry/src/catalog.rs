use std::collections::BTreeSet;
use targetdecl_types::{DependencySeed, ModuleName};

/// Name-based module lookup, owned by the build orchestrator.
///
/// A seeded name that does not resolve here is the orchestrator's build-time
/// error to raise; this crate only reports which names are unresolved.
pub trait ModuleCatalog {
    fn contains(&self, name: &ModuleName) -> bool;
}

/// In-memory `ModuleCatalog` over a fixed set of known module names.
#[derive(Debug, Clone, Default)]
pub struct StaticModuleCatalog {
    known: BTreeSet<ModuleName>,
}

impl StaticModuleCatalog {
    pub fn new(known: impl IntoIterator<Item = ModuleName>) -> Self {
        Self {
            known: known.into_iter().collect(),
        }
    }
}

impl ModuleCatalog for StaticModuleCatalog {
    fn contains(&self, name: &ModuleName) -> bool {
        self.known.contains(name)
    }
}

/// The seeded modules a catalog cannot resolve, in seed order.
pub fn unresolved_modules<'a>(
    seed: &'a DependencySeed,
    catalog: &dyn ModuleCatalog,
) -> Vec<&'a ModuleName> {
    seed.modules()
        .iter()
        .filter(|m| !catalog.contains(m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use targetdecl_types::{
        InvocationContext, SettingsVersion, TargetCategory, TargetDefinition, TargetRecord,
    };

    fn seed(extras: &[&str]) -> DependencySeed {
        let mut def = TargetDefinition::new("Raider", TargetCategory::Game, SettingsVersion::V2);
        def.extra_modules = extras.iter().map(|s| s.to_string()).collect();
        let record =
            TargetRecord::from_definition(&def, &InvocationContext::new("win64", "development"))
                .expect("valid record");
        DependencySeed::for_record(&record)
    }

    fn module(name: &str) -> ModuleName {
        ModuleName::new(name).expect("valid module name")
    }

    #[test]
    fn resolved_seed_reports_nothing() {
        let catalog = StaticModuleCatalog::new([module("Raider"), module("CoreGame")]);
        assert!(unresolved_modules(&seed(&["CoreGame"]), &catalog).is_empty());
    }

    #[test]
    fn unresolved_names_come_back_in_seed_order() {
        let catalog = StaticModuleCatalog::new([module("CoreGame")]);
        let seed = seed(&["CoreGame", "Net"]);

        let missing: Vec<&str> = unresolved_modules(&seed, &catalog)
            .iter()
            .map(|m| m.as_str())
            .collect();
        assert_eq!(missing, vec!["Raider", "Net"]);
    }
}
