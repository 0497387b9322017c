//! Command surface: `reload`, `help` and `set <name> <value>`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;
use crate::Placard;

pub const SET_USAGE: &str = "set <name> <value>";

pub const HELP_TEXT: &str = "\
placard commands:
help - shows this help
reload - reload placeholder configuration
set <name> <value> - sets the configured placeholder <name> to the given <value>";

/// Subcommands published for host tab-completion.
pub const COMPLETIONS: &[&str] = &["help", "reload", "set"];

/// A parsed command-surface invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reload,
    Help,
    Set { name: String, value: String },
}

impl Command {
    /// Parse raw argument words. Subcommands match case-insensitively;
    /// placeholder names stay case-sensitive.
    pub fn parse(args: &[&str]) -> Result<Self, Error> {
        let (cmd, rest) = match args.split_first() {
            Some(split) => split,
            None => return Err(Error::MissingCommand),
        };
        match cmd.to_ascii_lowercase().as_str() {
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            "set" => match rest {
                [name, value] => Ok(Command::Set {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                }),
                _ => Err(Error::BadCommandSyntax(SET_USAGE.to_string())),
            },
            _ => Err(Error::UnknownCommand((*cmd).to_string())),
        }
    }
}

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reloaded { placeholders: usize },
    Updated { name: String },
    Help(&'static str),
}

/// Routes command invocations to the engine. The host registers the same
/// handler under every command alias it exposes; failed invocations never
/// mutate engine state.
pub struct CommandHandler {
    engine: Arc<Placard>,
    config_path: PathBuf,
}

impl CommandHandler {
    pub fn new(engine: Arc<Placard>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            config_path: config_path.into(),
        }
    }

    /// Parse and dispatch in one step.
    pub fn handle(&self, args: &[&str]) -> Result<Outcome, Error> {
        self.dispatch(Command::parse(args)?)
    }

    pub fn dispatch(&self, command: Command) -> Result<Outcome, Error> {
        match command {
            Command::Reload => {
                log::info!("reloading placeholder configuration");
                let placeholders = self.engine.load_path(&self.config_path)?;
                Ok(Outcome::Reloaded { placeholders })
            }
            Command::Help => Ok(Outcome::Help(HELP_TEXT)),
            Command::Set { name, value } => {
                self.engine.set(&name, value)?;
                Ok(Outcome::Updated { name })
            }
        }
    }
}
