use fencecopy::errors::ClipboardError;
use fencecopy::interactive::{parse_command, SessionCommand, Toggle};

#[test]
fn test_blank_line_is_no_command() {
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn test_copy_takes_references() {
    let command = parse_command("copy src/a.rs file:///tmp/b%20c.txt").unwrap();
    assert_eq!(
        command,
        Some(SessionCommand::Copy(vec![
            "src/a.rs".to_owned(),
            "file:///tmp/b%20c.txt".to_owned()
        ]))
    );
}

#[test]
fn test_copy_without_references_is_rejected() {
    assert!(matches!(
        parse_command("copy"),
        Err(ClipboardError::InvalidCommand(_))
    ));
    assert!(matches!(
        parse_command("add   "),
        Err(ClipboardError::InvalidCommand(_))
    ));
}

#[test]
fn test_recopy_position() {
    assert_eq!(
        parse_command("recopy 3").unwrap(),
        Some(SessionCommand::Recopy(3))
    );
    assert!(parse_command("recopy 0").is_err());
    assert!(parse_command("recopy first").is_err());
}

#[test]
fn test_toggles() {
    assert_eq!(
        parse_command("set full-path off").unwrap(),
        Some(SessionCommand::Set(Toggle::FullPath, false))
    );
    assert_eq!(
        parse_command("set append on").unwrap(),
        Some(SessionCommand::Set(Toggle::Append, true))
    );
    assert!(parse_command("set append maybe").is_err());
    assert!(parse_command("set colour on").is_err());
}

#[test]
fn test_simple_commands() {
    let cases = [
        ("list", SessionCommand::List),
        ("process", SessionCommand::Process),
        ("clear-list", SessionCommand::ClearList),
        ("recent", SessionCommand::Recent),
        ("clear-recent", SessionCommand::ClearRecent),
        ("status", SessionCommand::Status),
        ("?", SessionCommand::Help),
        ("exit", SessionCommand::Quit),
    ];
    for (line, expected) in cases {
        assert_eq!(parse_command(line).unwrap(), Some(expected), "line: {line}");
    }
}

#[test]
fn test_unknown_command() {
    assert!(matches!(
        parse_command("paste"),
        Err(ClipboardError::InvalidCommand(name)) if name == "paste"
    ));
}
