// registry.rs - Name/arity table the host binding dispatches through.
//
// Built once during host setup and only read afterwards. Every registered
// function is `Send + Sync` and keeps no per-call state, so a single
// registry can be shared by all host threads without locking.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{FunctionError, Result};
use crate::functions::{RegexReplaceFunc, RegexpFunc};
use crate::levenshtein::LevenshteinFunc;
use crate::value::Value;

/// A scalar SQL function.
pub trait ScalarFunction: Send + Sync {
    /// Name the function is registered under.
    fn name(&self) -> &'static str;

    /// Accepted argument counts.
    fn arity(&self) -> RangeInclusive<usize>;

    /// Same inputs always give the same output.
    fn is_deterministic(&self) -> bool {
        true
    }

    /// Evaluate one call.
    fn invoke(&self, args: &[Value]) -> Result<Value>;
}

/// Read-mostly table of scalar functions keyed by lowercase name.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    scalars: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `regexp`, `regex_replace` and `levenshtein`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolton::config::EngineConfig;
    /// use bolton::registry::FunctionRegistry;
    /// use bolton::value::Value;
    ///
    /// let registry = FunctionRegistry::with_bolt_on_functions(EngineConfig::default());
    /// let hit = registry
    ///     .call("regexp", &["^a".into(), "abc".into()])
    ///     .unwrap();
    /// assert_eq!(hit, Value::Integer(1));
    /// ```
    pub fn with_bolt_on_functions(config: EngineConfig) -> Self {
        let mut registry = Self::new();
        register_bolt_on_functions(&mut registry, config);
        registry
    }

    /// Add `func`, replacing any function of the same name.
    pub fn register_scalar<F: ScalarFunction + 'static>(&mut self, func: F) {
        let name = func.name().to_ascii_lowercase();
        debug!(name = %name, arity = ?func.arity(), "registering scalar function");
        self.scalars.insert(name, Arc::new(func));
    }

    /// Look up a function by name, ignoring ASCII case.
    pub fn find_scalar(&self, name: &str) -> Option<Arc<dyn ScalarFunction>> {
        self.scalars.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Dispatch one call by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let func = self
            .find_scalar(name)
            .ok_or_else(|| FunctionError::NoSuchFunction(name.to_owned()))?;
        func.invoke(args)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scalars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("scalars", &self.names())
            .finish()
    }
}

/// Register the regex and edit-distance functions into `registry`.
pub fn register_bolt_on_functions(registry: &mut FunctionRegistry, config: EngineConfig) {
    info!("registering bolt-on scalar functions");
    registry.register_scalar(RegexpFunc::new(config));
    registry.register_scalar(RegexReplaceFunc::new(config));
    registry.register_scalar(LevenshteinFunc);
}
