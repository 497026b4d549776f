//! Tests for input line parsing and command execution

use rstest::rstest;

use contactbook::domain::{parse_line, AddressBook, Command, DomainError};

#[test]
fn given_add_line_when_parsing_then_add_command_with_args() {
    let command = parse_line("add Carol 999").unwrap();

    assert_eq!(
        command,
        Some(Command::Add {
            name: "Carol".to_string(),
            phone: "999".to_string(),
        })
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn given_blank_line_when_parsing_then_none(#[case] line: &str) {
    assert_eq!(parse_line(line), Ok(None));
}

#[rstest]
#[case("exit")]
#[case("close")]
#[case("good bye")]
#[case("Good Bye")]
#[case("EXIT")]
fn given_exit_phrase_when_parsing_then_exit_command(#[case] line: &str) {
    let command = parse_line(line).unwrap().unwrap();
    assert!(command.is_exit());
}

#[rstest]
#[case("show")]
#[case("show all")]
#[case("show all contacts")]
#[case("Show All Contacts")]
fn given_show_phrase_when_parsing_then_show_all(#[case] line: &str) {
    assert_eq!(parse_line(line), Ok(Some(Command::ShowAll)));
}

#[rstest]
#[case("get bob")]
#[case("get phone bob")]
#[case("GET PHONE bob")]
fn given_get_phrase_when_parsing_then_get_phone(#[case] line: &str) {
    assert_eq!(
        parse_line(line),
        Ok(Some(Command::GetPhone {
            name: "bob".to_string()
        }))
    );
}

#[test]
fn given_multi_word_name_when_parsing_add_then_last_token_is_phone() {
    assert_eq!(
        parse_line("add john smith +1-555-0100"),
        Ok(Some(Command::Add {
            name: "john smith".to_string(),
            phone: "+1-555-0100".to_string(),
        }))
    );
}

#[rstest]
#[case("foo")]
#[case("good")]
#[case("remove bob")]
fn given_unknown_verb_when_parsing_then_unknown_command(#[case] line: &str) {
    let err = parse_line(line).unwrap_err();
    assert!(matches!(err, DomainError::UnknownCommand(_)));
    assert_eq!(err.to_string(), "Invalid command. Please try again.");
}

#[rstest]
#[case("add", "add")]
#[case("add bob", "add")]
#[case("change bob", "change")]
#[case("get", "get")]
#[case("show all contacts now", "show all contacts")]
#[case("hello there", "hello")]
#[case("exit now", "exit")]
fn given_wrong_argument_count_when_parsing_then_arity_error(
    #[case] line: &str,
    #[case] verb: &str,
) {
    match parse_line(line) {
        Err(DomainError::WrongArity { verb: v, .. }) => assert_eq!(v, verb),
        other => panic!("expected arity error, got {:?}", other),
    }
}

#[test]
fn given_longest_verb_leaves_no_name_when_parsing_then_shorter_verb_used() {
    assert_eq!(
        parse_line("get phone"),
        Ok(Some(Command::GetPhone {
            name: "phone".to_string()
        }))
    );
}

#[test]
fn given_contact_named_phone_when_getting_then_found() {
    let mut book = AddressBook::new();
    parse_line("add phone 1")
        .unwrap()
        .unwrap()
        .execute(&mut book)
        .unwrap();

    let reply = parse_line("get phone")
        .unwrap()
        .unwrap()
        .execute(&mut book)
        .unwrap();

    assert_eq!(reply, "The phone number for contact phone is 1");
}

#[test]
fn given_arity_error_when_displayed_then_names_usage() {
    let err = parse_line("add bob").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid command: 'add' expects <name> <phone>. Please try again."
    );
}

#[test]
fn given_commands_when_executed_then_reply_texts_match() {
    let mut book = AddressBook::new();

    let add = Command::Add {
        name: "carol".to_string(),
        phone: "999".to_string(),
    };
    assert_eq!(
        add.execute(&mut book).unwrap(),
        "Contact carol with phone 999 saved"
    );

    let change = Command::ChangePhone {
        name: "Carol".to_string(),
        phone: "111".to_string(),
    };
    assert_eq!(
        change.execute(&mut book).unwrap(),
        "Phone number for contact Carol has been updated to 111."
    );

    let get = Command::GetPhone {
        name: "CAROL".to_string(),
    };
    assert_eq!(
        get.execute(&mut book).unwrap(),
        "The phone number for contact CAROL is 111"
    );

    assert_eq!(
        Command::ShowAll.execute(&mut book).unwrap(),
        "Addressbook:\nCarol: 111\n"
    );
    assert_eq!(
        Command::Hello.execute(&mut book).unwrap(),
        "How can I help you?"
    );
    assert_eq!(Command::Exit.execute(&mut book).unwrap(), "Good bye");
}

#[test]
fn given_mutating_and_read_only_commands_then_flags_match() {
    assert!(parse_line("add a 1").unwrap().unwrap().is_mutating());
    assert!(parse_line("change a 1").unwrap().unwrap().is_mutating());
    assert!(!parse_line("get a").unwrap().unwrap().is_mutating());
    assert!(!parse_line("show").unwrap().unwrap().is_mutating());
    assert!(!parse_line("hello").unwrap().unwrap().is_exit());
}
