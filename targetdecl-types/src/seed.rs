use crate::record::{ModuleName, TargetRecord};
use serde::Serialize;

/// The module sequence an orchestrator folds into a target's dependency
/// graph: the convention module (the module sharing the target's name) first,
/// then the record's extra modules in declaration order.
///
/// If the declaration also listed the convention module among its extras, the
/// seed keeps the convention position and drops the later occurrence, so the
/// sequence is always duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySeed {
    target: String,
    modules: Vec<ModuleName>,
}

impl DependencySeed {
    pub fn for_record(record: &TargetRecord) -> Self {
        let convention = ModuleName::from_validated(record.name().to_string());
        let mut modules = Vec::with_capacity(1 + record.extra_modules().len());
        modules.push(convention.clone());
        for module in record.extra_modules() {
            if *module != convention {
                modules.push(module.clone());
            }
        }
        Self {
            target: record.name().to_string(),
            modules,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Read-only view, link order preserved.
    pub fn modules(&self) -> &[ModuleName] {
        &self.modules
    }
}
