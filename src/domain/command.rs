//! Commands: the static verb table, line parsing and execution

use crate::domain::{AddressBook, DomainError, DomainResult};

/// Which command a verb phrase selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    ChangePhone,
    GetPhone,
    ShowAll,
    Hello,
    Exit,
}

/// Verb phrases and the command each one selects.
///
/// Phrases are lowercase and matched word by word against the start of the
/// input line, longest phrase first.
pub const COMMAND_TABLE: &[(&str, CommandKind)] = &[
    ("add", CommandKind::Add),
    ("good bye", CommandKind::Exit),
    ("close", CommandKind::Exit),
    ("exit", CommandKind::Exit),
    ("hello", CommandKind::Hello),
    ("change", CommandKind::ChangePhone),
    ("show", CommandKind::ShowAll),
    ("show all", CommandKind::ShowAll),
    ("show all contacts", CommandKind::ShowAll),
    ("get", CommandKind::GetPhone),
    ("get phone", CommandKind::GetPhone),
];

impl CommandKind {
    /// Argument usage shown in arity errors.
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Add | CommandKind::ChangePhone => "<name> <phone>",
            CommandKind::GetPhone => "<name>",
            CommandKind::ShowAll | CommandKind::Hello | CommandKind::Exit => "no arguments",
        }
    }

    /// Construct the command from the tokens following the verb.
    ///
    /// Two-argument commands take the last token as the phone and join the
    /// rest into the name.
    pub fn build(self, verb: &str, args: &[&str]) -> DomainResult<Command> {
        let arity_error = || DomainError::WrongArity {
            verb: verb.to_string(),
            usage: self.usage(),
        };

        match self {
            CommandKind::Add | CommandKind::ChangePhone => {
                let (phone, name) = args.split_last().ok_or_else(arity_error)?;
                if name.is_empty() {
                    return Err(arity_error());
                }
                let name = name.join(" ");
                let phone = phone.to_string();
                Ok(if self == CommandKind::Add {
                    Command::Add { name, phone }
                } else {
                    Command::ChangePhone { name, phone }
                })
            }
            CommandKind::GetPhone => {
                if args.is_empty() {
                    return Err(arity_error());
                }
                Ok(Command::GetPhone {
                    name: args.join(" "),
                })
            }
            CommandKind::ShowAll | CommandKind::Hello | CommandKind::Exit => {
                if !args.is_empty() {
                    return Err(arity_error());
                }
                Ok(match self {
                    CommandKind::ShowAll => Command::ShowAll,
                    CommandKind::Hello => Command::Hello,
                    _ => Command::Exit,
                })
            }
        }
    }
}

/// A parsed input line, ready to run against an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phone: String },
    ChangePhone { name: String, phone: String },
    GetPhone { name: String },
    ShowAll,
    Hello,
    Exit,
}

impl Command {
    /// Execute against the given book and produce the reply text.
    pub fn execute(&self, book: &mut AddressBook) -> DomainResult<String> {
        match self {
            Command::Add { name, phone } => {
                book.add_record(name, phone);
                Ok(format!("Contact {} with phone {} saved", name, phone))
            }
            Command::ChangePhone { name, phone } => {
                book.change_phone(name, phone)?;
                Ok(format!(
                    "Phone number for contact {} has been updated to {}.",
                    name, phone
                ))
            }
            Command::GetPhone { name } => {
                let phone = book.get_phone(name)?;
                Ok(format!("The phone number for contact {} is {}", name, phone))
            }
            Command::ShowAll => Ok(book.show_all_contacts()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Exit => Ok("Good bye".to_string()),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// True for commands that change the book and need persisting.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::ChangePhone { .. })
    }
}

/// All verb phrases at the start of `tokens`, longest first.
pub fn matching_verbs(tokens: &[&str]) -> Vec<(&'static str, CommandKind)> {
    let mut matches: Vec<(&'static str, CommandKind)> = COMMAND_TABLE
        .iter()
        .filter(|(phrase, _)| {
            let words: Vec<&str> = phrase.split(' ').collect();
            words.len() <= tokens.len()
                && words
                    .iter()
                    .zip(tokens)
                    .all(|(word, token)| token.to_lowercase() == *word)
        })
        .copied()
        .collect();
    matches.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.split(' ').count()));
    matches
}

/// Find the longest verb phrase at the start of `tokens`.
///
/// Returns the phrase and the command kind it selects.
pub fn resolve_verb(tokens: &[&str]) -> Option<(&'static str, CommandKind)> {
    matching_verbs(tokens).into_iter().next()
}

/// Parse one input line.
///
/// Blank lines yield `Ok(None)`. When the longest verb phrase leaves the
/// wrong number of arguments, shorter phrases are tried, so `get phone`
/// looks up a contact named "Phone". If every phrase fails, the error of
/// the longest one is returned.
pub fn parse_line(line: &str) -> DomainResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let mut first_error = None;
    for (phrase, kind) in matching_verbs(&tokens) {
        let consumed = phrase.split(' ').count();
        match kind.build(phrase, &tokens[consumed..]) {
            Ok(command) => return Ok(Some(command)),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error.unwrap_or_else(|| DomainError::UnknownCommand(first.to_lowercase())))
}
