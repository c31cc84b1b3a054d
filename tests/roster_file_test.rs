use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use wichtel::adapters::{FixedYear, TerminalDialog};
use wichtel::config::load_roster;
use wichtel::utils::validation::Validate;
use wichtel::{MatchingFlow, WichtelError};

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_roster_and_messages() {
    let file = write_roster(
        r#"
[event]
name = "Team"
organizer = "Dana"
year = 2017

[messages]
welcome = "Welcome to the {year} exchange"
prompt = "Your code"
prompt_default = "code"
rejected = "Unknown code, ask {organizer}"
reveal = "{name}, you give a present to {partner}"

[[participants]]
name = "Alice"
code = "a"

[[participants]]
name = "Bob"
code = "b"

[[participants]]
name = "Carol"
code = "c"
"#,
    );

    let config = load_roster(file.path().to_str()).unwrap();
    config.validate().unwrap();

    let seed_year = config.seed_year(None, &FixedYear(2030));
    assert_eq!(seed_year, 2017);

    let dialog = TerminalDialog::new(Cursor::new(b"b\n".to_vec()), Vec::new());
    let mut flow = MatchingFlow::new(config.roster(), seed_year, dialog)
        .with_messages(config.messages.clone())
        .with_organizer(config.organizer());

    let reveal = flow.run().unwrap();
    assert_eq!(reveal.partner, "Carol");

    let output = String::from_utf8(flow.into_dialog().into_output()).unwrap();
    assert_eq!(
        output,
        "Welcome to the 2017 exchange\nYour code [code]: Bob, you give a present to Carol\n"
    );
}

#[test]
fn test_custom_rejection_message() {
    let file = write_roster(
        r#"
[event]
name = "Team"
organizer = "Dana"

[messages]
rejected = "Unknown code, ask {organizer}"

[[participants]]
name = "Alice"
code = "a"
"#,
    );

    let config = load_roster(file.path().to_str()).unwrap();
    let dialog = TerminalDialog::new(Cursor::new(b"nope\n".to_vec()), Vec::new());
    let mut flow = MatchingFlow::new(config.roster(), 2026, dialog)
        .with_messages(config.messages.clone())
        .with_organizer(config.organizer());

    assert!(matches!(flow.run(), Err(WichtelError::UnrecognizedSecret)));
    let output = String::from_utf8(flow.into_dialog().into_output()).unwrap();
    assert!(output.ends_with("Unknown code, ask Dana\n"));
}

#[test]
fn test_duplicate_codes_fail_integrity_check() {
    let file = write_roster(
        r#"
[event]
name = "Team"

[[participants]]
name = "Alice"
code = "same"

[[participants]]
name = "Bob"
code = "same"
"#,
    );

    let config = load_roster(file.path().to_str()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, WichtelError::RosterIntegrityError { .. }));
    assert_eq!(err.severity().exit_code(), 1);
}

#[test]
fn test_missing_roster_file() {
    let err = load_roster(Some("/definitely/not/here/roster.toml")).unwrap_err();
    assert!(matches!(err, WichtelError::IoError(_)));
}

#[test]
fn test_builtin_roster_when_no_path() {
    let config = load_roster(None).unwrap();
    assert_eq!(config.participants.len(), 15);
}
