use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `set` targeted a name that was never declared in the configuration
    UnknownPlaceholder(String),
    /// Configuration source could not be read
    ConfigRead(String),
    /// Expansion substitution budget exhausted (placeholder cycle)
    RecursiveExpansion(String),
    /// Command invoked with no subcommand
    MissingCommand,
    /// Unrecognized subcommand
    UnknownCommand(String),
    /// Subcommand invoked with the wrong arguments
    BadCommandSyntax(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPlaceholder(name) => write!(
                f,
                "cannot set unknown placeholder '{}'; only configured placeholders can be changed",
                name
            ),
            Error::ConfigRead(reason) => {
                write!(f, "failed to read placeholder configuration: {}", reason)
            }
            Error::RecursiveExpansion(name) => write!(
                f,
                "expansion limit exceeded while resolving '{}' (placeholder cycle?)",
                name
            ),
            Error::MissingCommand => write!(f, "missing command parameters"),
            Error::UnknownCommand(cmd) => write!(f, "unknown command: {}", cmd),
            Error::BadCommandSyntax(usage) => write!(f, "invalid parameters; syntax: {}", usage),
        }
    }
}

impl std::error::Error for Error {}
