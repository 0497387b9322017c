mod command;
mod config;
mod error;
mod expansion;
mod resolver;
mod source;
mod table;

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use memchr::{memchr, memmem};

pub use command::{Command, CommandHandler, Outcome, COMPLETIONS, HELP_TEXT, SET_USAGE};
pub use config::{Config, DEFAULT_MAX_EXPANSIONS, DEFAULT_NAMESPACE};
pub use error::Error;
pub use expansion::{Expansion, DEFAULT_ALIASES};
pub use resolver::Resolver;
pub use source::{ensure_config_file, parse_properties, read_properties_file, DEFAULT_TEMPLATE};
pub use table::{PlaceholderSource, PlaceholderTable};

/// Main entry point for the placard placeholder engine.
///
/// Owns the placeholder table behind a mutex so a host framework may issue
/// resolves, point-updates and reloads from multiple worker threads. The
/// lock is released before the external resolver runs.
#[derive(Debug)]
pub struct Placard {
    config: Config,
    table: Mutex<PlaceholderTable>,
}

impl Default for Placard {
    fn default() -> Self {
        Self::new()
    }
}

impl Placard {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            table: Mutex::new(PlaceholderTable::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, PlaceholderTable> {
        // The table is a plain map, valid after any panic; poisoning carries
        // no information worth propagating.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the whole table with `pairs`, discarding prior contents
    /// (including any point-updates made with [`set`](Self::set)).
    pub fn load<I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.lock().load(pairs);
    }

    /// Reload the table from a `.properties`-style file. A read failure
    /// leaves the current contents in place. Returns the number of
    /// placeholders now declared.
    pub fn load_path(&self, path: &Path) -> Result<usize, Error> {
        let pairs = source::read_properties_file(path)?;
        let mut table = self.lock();
        table.load(pairs);
        for name in table.names() {
            log::debug!(
                "custom placeholder: {}={}",
                name,
                table.get(name).unwrap_or_default()
            );
        }
        log::info!(
            "loaded {} custom placeholders from {}",
            table.len(),
            path.display()
        );
        Ok(table.len())
    }

    /// Point-update one declared placeholder; undeclared names are rejected.
    pub fn set(&self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let value = value.into();
        log::info!("changing custom placeholder '{}' to '{}'", name, value);
        self.lock().set(name, value)
    }

    /// Raw value snapshot; `None` when the name was never declared.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).map(str::to_string)
    }

    /// Declared names in declaration order, as a snapshot.
    pub fn names(&self) -> Vec<String> {
        self.lock().names().to_vec()
    }

    /// Empty the table (shutdown path).
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Resolve `name`: nested `${...}` expansion against the table, then at
    /// most one pass through `external` for any further substitutions it
    /// understands. Undeclared names come straight back as themselves; the
    /// external pass is skipped for them and for expanded values still
    /// carrying the reserved namespace marker.
    pub fn resolve<F>(&self, name: &str, external: F) -> Result<String, Error>
    where
        F: FnOnce(&str) -> String,
    {
        let expanded = {
            let table = self.lock();
            let resolver = Resolver::new(&*table, &self.config);
            match resolver.expand_declared(name)? {
                Some(value) => value.into_owned(),
                None => return Ok(name.to_string()),
            }
            // lock drops here, before the external resolver runs
        };
        if self.config.is_internal(&expanded) {
            return Ok(expanded);
        }
        Ok(external(&expanded))
    }
}

/// Collect the distinct `${...}` reference names in `input`.
pub fn find_placeholder_references(input: &str) -> Vec<String> {
    let bytes = input.as_bytes();
    let mut names = HashSet::new();
    let mut pos = 0;

    while let Some(rel) = memmem::find(&bytes[pos..], b"${") {
        let start = pos + rel;
        let end = match memchr(b'}', &bytes[start + 2..]) {
            Some(rel_end) => start + 2 + rel_end,
            None => break,
        };
        if end > start + 2 {
            names.insert(input[start + 2..end].to_string());
        }
        pos = end + 1;
    }

    // Convert to sorted Vec for deterministic ordering
    let mut result: Vec<String> = names.into_iter().collect();
    result.sort();
    result
}
