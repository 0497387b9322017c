//! `.properties`-style configuration source.
//!
//! The store itself only ever sees ordered `(key, value)` pairs; this module
//! produces them from the flat text format the configuration file uses.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Template written on first run when no configuration file exists yet.
pub const DEFAULT_TEMPLATE: &str = "\
# Custom placeholder definitions, one per line:
#
#   <name> = <value>
#
# Values may reference other placeholders with ${otherName}.
server_name = My Server
welcome = Welcome to ${server_name}!
";

/// Parse `.properties`-style text into ordered (key, value) pairs.
///
/// Blank lines and lines whose first non-blank character is `#` or `!` are
/// skipped. The first `=` or `:` separates key from value, both trimmed; a
/// line without a separator declares its whole content as a key with an
/// empty value.
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.find(|c| c == '=' || c == ':') {
            Some(sep) => {
                let key = line[..sep].trim_end();
                let value = line[sep + 1..].trim();
                if !key.is_empty() {
                    pairs.push((key.to_string(), value.to_string()));
                }
            }
            None => pairs.push((line.trim_end().to_string(), String::new())),
        }
    }
    pairs
}

/// Read and parse a configuration file into ordered pairs.
pub fn read_properties_file(path: &Path) -> Result<Vec<(String, String)>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::ConfigRead(format!("{}: {}", path.display(), e)))?;
    Ok(parse_properties(&text))
}

/// Create the configuration file from [`DEFAULT_TEMPLATE`] if it does not
/// exist yet. An existing file is never touched.
pub fn ensure_config_file(path: &Path) -> Result<(), Error> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::ConfigRead(format!("{}: {}", dir.display(), e)))?;
        }
    }
    log::info!("creating placeholder configuration file: {}", path.display());
    fs::write(path, DEFAULT_TEMPLATE)
        .map_err(|e| Error::ConfigRead(format!("{}: {}", path.display(), e)))
}
