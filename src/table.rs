use std::collections::HashMap;

use crate::error::Error;

/// A source of raw (unexpanded) placeholder values during resolution.
pub trait PlaceholderSource {
    /// Retrieve the raw value of a placeholder by name.
    fn raw_value(&self, name: &str) -> Option<&str>;
}

impl PlaceholderSource for HashMap<String, String> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|s| s.as_str())
    }
}

impl PlaceholderSource for HashMap<&str, &str> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Insertion-ordered table of named placeholder values.
///
/// Names keep the position of their first declaration; re-declaring a name
/// replaces its value without moving it. The table holds raw values only,
/// resolution never writes back into it.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTable {
    order: Vec<String>,
    values: HashMap<String, String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Replace the entire contents with `pairs`, preserving the order pairs
    /// are produced in. Prior contents, including point-updates made with
    /// [`set`](Self::set), are discarded.
    pub fn load<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut order = Vec::new();
        let mut values = HashMap::new();
        for (name, value) in pairs {
            if values.insert(name.clone(), value).is_none() {
                order.push(name);
            }
        }
        // Built fully before the swap so a panicking iterator cannot leave
        // the table half-cleared.
        self.order = order;
        self.values = values;
    }

    /// Replace the value of an already-declared placeholder. Names that were
    /// never declared cannot be introduced this way.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(Error::UnknownPlaceholder(name.to_string())),
        }
    }

    /// Raw value lookup. `None` means the name was never declared, which is
    /// distinct from a placeholder declared with an empty value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Declared names in declaration order, without duplicates.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Empty the table.
    pub fn clear(&mut self) {
        self.order.clear();
        self.values.clear();
    }
}

impl PlaceholderSource for PlaceholderTable {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}
