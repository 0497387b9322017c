mod common;
use std::sync::Arc;

use common::{create_engine, identity, sample_pairs};
use placard::{Command, CommandHandler, Error, Outcome, COMPLETIONS, HELP_TEXT};
use tempfile::TempDir;

#[test]
fn test_parse_reload() {
    assert_eq!(Command::parse(&["reload"]).unwrap(), Command::Reload);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(Command::parse(&["RELOAD"]).unwrap(), Command::Reload);
    assert_eq!(Command::parse(&["Help"]).unwrap(), Command::Help);
}

#[test]
fn test_parse_set() {
    assert_eq!(
        Command::parse(&["set", "server_name", "Hub"]).unwrap(),
        Command::Set {
            name: "server_name".to_string(),
            value: "Hub".to_string(),
        }
    );
}

#[test]
fn test_parse_set_keeps_name_case() {
    match Command::parse(&["SET", "MixedCase", "v"]).unwrap() {
        Command::Set { name, .. } => assert_eq!(name, "MixedCase"),
        other => panic!("expected Set, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_invocation() {
    match Command::parse(&[]) {
        Err(Error::MissingCommand) => {}
        other => panic!("expected MissingCommand, got {:?}", other),
    }
}

#[test]
fn test_parse_unknown_subcommand() {
    match Command::parse(&["frobnicate"]) {
        Err(Error::UnknownCommand(cmd)) => assert_eq!(cmd, "frobnicate"),
        other => panic!("expected UnknownCommand, got {:?}", other),
    }
}

#[test]
fn test_parse_set_wrong_arity() {
    for args in [&["set"][..], &["set", "only_name"][..], &["set", "a", "b", "c"][..]] {
        match Command::parse(args) {
            Err(Error::BadCommandSyntax(usage)) => assert_eq!(usage, "set <name> <value>"),
            other => panic!("expected BadCommandSyntax for {:?}, got {:?}", args, other),
        }
    }
}

#[test]
fn test_help_lists_every_subcommand() {
    for cmd in COMPLETIONS {
        assert!(HELP_TEXT.contains(cmd), "help text misses '{}'", cmd);
    }
}

#[test]
fn test_handler_help() {
    let handler = CommandHandler::new(Arc::new(create_engine()), "unused.properties");
    assert_eq!(
        handler.handle(&["help"]).unwrap(),
        Outcome::Help(HELP_TEXT)
    );
}

#[test]
fn test_handler_set_updates_engine() {
    let engine = Arc::new(create_engine());
    let handler = CommandHandler::new(Arc::clone(&engine), "unused.properties");

    let outcome = handler.handle(&["set", "server_name", "Hub"]).unwrap();
    assert_eq!(
        outcome,
        Outcome::Updated {
            name: "server_name".to_string()
        }
    );
    assert_eq!(engine.get("server_name"), Some("Hub".to_string()));
}

#[test]
fn test_handler_set_unknown_reports_error() {
    let engine = Arc::new(create_engine());
    let handler = CommandHandler::new(Arc::clone(&engine), "unused.properties");

    match handler.handle(&["set", "nope", "v"]) {
        Err(Error::UnknownPlaceholder(name)) => assert_eq!(name, "nope"),
        other => panic!("expected UnknownPlaceholder, got {:?}", other),
    }
    assert_eq!(engine.get("nope"), None);
}

#[test]
fn test_handler_reload_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("placeholders.properties");
    std::fs::write(&path, "greeting = hi\nfarewell = bye\n").unwrap();

    let engine = Arc::new(create_engine());
    let handler = CommandHandler::new(Arc::clone(&engine), &path);

    let outcome = handler.handle(&["reload"]).unwrap();
    assert_eq!(outcome, Outcome::Reloaded { placeholders: 2 });
    assert_eq!(engine.names(), vec!["greeting", "farewell"]);
    assert_eq!(engine.resolve("greeting", identity).unwrap(), "hi");
}

#[test]
fn test_handler_reload_failure_keeps_table() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.properties");

    let engine = Arc::new(create_engine());
    let handler = CommandHandler::new(Arc::clone(&engine), &missing);

    match handler.handle(&["reload"]) {
        Err(Error::ConfigRead(_)) => {}
        other => panic!("expected ConfigRead, got {:?}", other),
    }
    // prior contents untouched
    assert_eq!(engine.names().len(), sample_pairs().len());
    assert_eq!(engine.get("server_name"), Some("My Server".to_string()));
}
