//! Registration adapter for the external placeholder-resolution framework.

use std::sync::Arc;

use crate::Placard;

/// Aliases the engine conventionally registers under.
pub const DEFAULT_ALIASES: [&str; 2] = ["custompapi", "cpapi"];

/// One registered identifier of the engine. The host constructs an instance
/// per published alias and hands it to the framework; there is no
/// process-wide singleton behind it.
pub struct Expansion {
    alias: String,
    engine: Arc<Placard>,
}

impl Expansion {
    pub fn new(engine: Arc<Placard>, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            engine,
        }
    }

    /// Identifier this instance answers for.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Declared placeholder names, advertised to the framework in
    /// declaration order.
    pub fn placeholders(&self) -> Vec<String> {
        self.engine.names()
    }

    /// Answer a framework request for `params`. A resolution failure
    /// degrades to the literal requested name, the same
    /// surface-as-visible-text policy applied to unknown names.
    pub fn on_request<F>(&self, params: &str, external: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        match self.engine.resolve(params, external) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("placeholder request '{}' failed: {}", params, err);
                params.to_string()
            }
        }
    }
}
