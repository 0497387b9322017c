use std::borrow::Cow;

use memchr::{memchr, memmem};

use crate::config::Config;
use crate::error::Error;
use crate::table::PlaceholderSource;

pub struct Resolver<'a> {
    source: &'a dyn PlaceholderSource,
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    pub fn new(source: &'a dyn PlaceholderSource, config: &'a Config) -> Self {
        Self { source, config }
    }

    /// Resolve `name` against the source, then hand the expanded value to
    /// `external` for any further substitutions it understands.
    ///
    /// An undeclared name comes straight back as itself, without touching
    /// `external`. Otherwise `external` is called at most once, and never
    /// when the expanded value still contains the reserved namespace marker:
    /// feeding such a value to the external framework could route straight
    /// back into this engine.
    pub fn resolve<'b, F>(&self, name: &'b str, external: F) -> Result<Cow<'b, str>, Error>
    where
        'a: 'b,
        F: FnOnce(&str) -> String,
    {
        let expanded = match self.expand_declared(name)? {
            Some(value) => value,
            None => return Ok(Cow::Borrowed(name)),
        };
        if self.config.is_internal(&expanded) {
            return Ok(expanded);
        }
        Ok(Cow::Owned(external(&expanded)))
    }

    /// Look up `name` and expand every nested `${...}` reference in its
    /// value. Undeclared names come back as themselves, so unresolved
    /// placeholders surface as visible literal text rather than blank
    /// output.
    pub fn expand<'b>(&self, name: &'b str) -> Result<Cow<'b, str>, Error>
    where
        'a: 'b,
    {
        match self.expand_declared(name)? {
            Some(value) => Ok(value),
            None => Ok(Cow::Borrowed(name)),
        }
    }

    /// Expansion for declared names only; `None` when the source does not
    /// know `name`.
    ///
    /// Returns `Cow::Borrowed` when nothing had to be substituted.
    /// Unterminated or empty braces stop expansion and leave the remainder
    /// untouched.
    pub fn expand_declared(&self, name: &str) -> Result<Option<Cow<'a, str>>, Error> {
        let raw = match self.source.raw_value(name) {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let mut value: Cow<'a, str> = Cow::Borrowed(raw);
        let mut budget = self.config.max_expansions;

        // Splice loop: substitute the first reference, then re-scan the
        // reassembled string from the start, so spliced-in text is itself
        // expanded on a later iteration.
        loop {
            let start = match memmem::find(value.as_bytes(), b"${") {
                Some(pos) => pos,
                None => break,
            };
            let end = match memchr(b'}', &value.as_bytes()[start + 2..]) {
                Some(rel) => start + 2 + rel,
                // Unterminated reference: keep the value as-is.
                None => break,
            };
            if end == start + 2 {
                // Empty `${}`: malformed, stop expanding.
                break;
            }

            if budget == 0 {
                return Err(Error::RecursiveExpansion(name.to_string()));
            }
            budget -= 1;

            let expression = &value[start + 2..end];
            // Known names splice in their raw value; unknown ones splice in
            // the literal expression text.
            let substituted = self.source.raw_value(expression).unwrap_or(expression);

            let mut next = String::with_capacity(value.len() + substituted.len());
            next.push_str(&value[..start]);
            next.push_str(substituted);
            next.push_str(&value[end + 1..]);
            value = Cow::Owned(next);
        }

        Ok(Some(value))
    }
}
