use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use targetdecl_types::{ConfigurationError, InvocationContext, TargetDefinition, TargetRecord};

type CacheKey = (String, InvocationContext);

/// Caches constructed records per (target, invocation context).
///
/// The lock is held across construction, so each key constructs at most
/// once; construction is pure and cheap, which keeps that affordable.
/// Cached records are shared as `Arc` and never copied or mutated. Failed
/// constructions are not cached; retrying the same inputs reproduces the
/// same error deterministically.
#[derive(Debug, Default)]
pub struct RecordCache {
    records: Mutex<HashMap<CacheKey, Arc<TargetRecord>>>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_construct(
        &self,
        def: &TargetDefinition,
        ctx: &InvocationContext,
    ) -> Result<Arc<TargetRecord>, ConfigurationError> {
        let key = (def.name.clone(), ctx.clone());
        let mut records = self.lock();
        if let Some(record) = records.get(&key) {
            return Ok(Arc::clone(record));
        }
        let record = Arc::new(TargetRecord::from_definition(def, ctx)?);
        records.insert(key, Arc::clone(&record));
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are inserted whole; a poisoned lock holds no torn state.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, Arc<TargetRecord>>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
