//! Debug sink registry for creating sinks by name
//!
//! Configuration files refer to a debug sink by name (`debug_mirror: console`);
//! this registry resolves the name to a fresh sink instance.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::console::ConsoleSink;
use super::memory::MemorySink;
use super::noop::NoOpSink;
use super::traits::SharedSink;

/// Factory function type for creating debug sinks
pub type SinkFactory = Box<dyn Fn() -> SharedSink + Send + Sync>;

/// Definition of a registered debug sink
pub struct SinkDefinition {
    /// Unique name for this sink
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SinkFactory,
}

impl std::fmt::Debug for SinkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn definition(name: &str, description: &str, factory: SinkFactory) -> (String, SinkDefinition) {
    (
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of debug sinks
static REGISTRY: Lazy<RwLock<HashMap<String, SinkDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        definition(
            "console",
            "Mirror records to stderr",
            Box::new(|| -> SharedSink { Arc::new(ConsoleSink::new()) }),
        ),
        definition(
            "noop",
            "Discard mirrored records",
            Box::new(|| -> SharedSink { Arc::new(NoOpSink::new()) }),
        ),
        definition(
            "memory",
            "Keep mirrored records in memory",
            Box::new(|| -> SharedSink { Arc::new(MemorySink::new()) }),
        ),
    ]);
    RwLock::new(map)
});

/// Register a new debug sink type, replacing any sink of the same name
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use levelog_core::logging::{register_debug_sink, create_debug_sink, ConsoleSink, SharedSink};
///
/// register_debug_sink(
///     "tagged",
///     "stderr with a tag",
///     Box::new(|| -> SharedSink { Arc::new(ConsoleSink::with_prefix("[app]")) }),
/// );
/// assert!(create_debug_sink("tagged").is_some());
/// ```
pub fn register_debug_sink(name: &str, description: &str, factory: SinkFactory) {
    let mut registry = REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    let (key, def) = definition(name, description, factory);
    registry.insert(key, def);
}

/// Create a debug sink by name, or None if the name is not registered
pub fn create_debug_sink(name: &str) -> Option<SharedSink> {
    let registry = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered debug sinks as (name, description) pairs, sorted by name
pub fn list_debug_sinks() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    let mut sinks: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    sinks.sort();
    sinks
}
