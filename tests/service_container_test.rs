//! Tests for ServiceContainer wiring

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use contactbook::application::services::Outcome;
use contactbook::cli::CliError;
use contactbook::config::Settings;
use contactbook::exitcode;
use contactbook::infrastructure::traits::RealFileSystem;
use contactbook::infrastructure::{InfraError, ServiceContainer};

#[test]
fn given_existing_book_when_building_dispatcher_then_loads_contacts() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.pickle");
    fs::write(&path, "[[contacts]]\nname = \"Alice\"\nphone = \"1\"\n").unwrap();
    let settings = Settings::default().with_overrides(Some(path), true);

    let container = ServiceContainer::with_deps(settings, Arc::new(RealFileSystem));
    let mut dispatcher = container.dispatcher().unwrap();

    assert_eq!(
        dispatcher.dispatch("get alice").unwrap(),
        Outcome::Reply {
            message: "The phone number for contact alice is 1".to_string(),
            exit: false,
        }
    );
}

#[test]
fn given_corrupt_book_when_building_dispatcher_then_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.pickle");
    fs::write(&path, "contacts = 42").unwrap();
    let settings = Settings::default().with_overrides(Some(path), false);

    let container = ServiceContainer::new(settings);

    assert!(matches!(
        container.dispatcher(),
        Err(InfraError::Application(_))
    ));
}

#[test]
fn given_non_utf8_book_when_building_dispatcher_then_exits_with_dataerr() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.pickle");
    fs::write(&path, [0x80u8, 0x04, 0x95, 0x1d, 0xff]).unwrap();
    let settings = Settings::default().with_overrides(Some(path), false);

    let err = match ServiceContainer::new(settings).dispatcher() {
        Err(e) => CliError::from(e),
        Ok(_) => panic!("binary book file must not load"),
    };

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}
