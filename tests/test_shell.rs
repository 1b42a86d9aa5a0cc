//! Scripted sessions against the interactive shell.

mod fixtures;
mod mocks;

use address_book::{AddressBook, Config, PhoneMatch, Shell};
use fixtures::*;
use mocks::MockRecordStore;
use std::io::{self, BufReader, Cursor, Read};

/// Reader that fails every read, standing in for a broken terminal.
struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
    }
}

/// Feed `script` to a shell over `book` and return everything it printed.
fn run_script(book: &mut AddressBook, store: &MockRecordStore, config: &Config, script: &str) -> String {
    let mut output = Vec::new();
    Shell::new(book, store, config, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn run(book: &mut AddressBook, script: &str) -> String {
    run_script(book, &MockRecordStore::new(), &Config::default(), script)
}

#[test]
fn test_hello_and_exit() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "hello\nexit\n");

    assert!(output.contains("Enter a command: "));
    assert!(output.contains("How can I help you?"));
    assert!(output.ends_with("Good bye!\n"));
}

#[test]
fn test_exit_aliases_stop_the_loop() {
    for alias in ["good bye", "close", "exit", "EXIT"] {
        let mut book = AddressBook::new();
        let output = run(&mut book, &format!("{}\nhello\n", alias));
        assert!(output.contains("Good bye!"));
        assert!(!output.contains("How can I help you?"), "alias {:?}", alias);
    }
}

#[test]
fn test_end_of_input_stops_the_loop() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "hello\n");
    assert!(output.contains("How can I help you?"));
    assert!(!output.contains("Good bye!"));
}

#[test]
fn test_unknown_command() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "dance\nexit\n");
    assert!(output.contains("Invalid command. Please try again."));
}

#[test]
fn test_add_contact() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "add\nAlice 1234567890\nexit\n");

    assert!(output.contains("Enter name and phone number: "));
    assert!(output.contains("Contact added successfully."));
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("Alice").unwrap().phone.to_string(), "1234567890");
}

#[test]
fn test_add_rejects_invalid_phone_and_continues() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "add\nAlice 12345\nhello\nexit\n");

    assert!(output.contains("Invalid phone number: 12345"));
    assert!(output.contains("How can I help you?"));
    assert!(book.is_empty());
}

#[test]
fn test_add_rejects_malformed_input() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "add\nAlice\nexit\n");

    assert!(output.contains("Please enter a name and a phone number"));
    assert!(book.is_empty());
}

#[test]
fn test_change_phone() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "change\nBob\n5555555555\nexit\n");

    assert!(output.contains("Enter new phone number: "));
    assert!(output.contains("Phone number changed successfully."));
    assert_eq!(book.find("Bob").unwrap().phone.to_string(), "5555555555");
}

#[test]
fn test_change_unknown_contact() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "change\nCarol\nexit\n");

    assert!(output.contains("Contact not found."));
    assert!(!output.contains("Enter new phone number: "));
}

#[test]
fn test_change_rejects_invalid_phone() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "change\nBob\n55\nexit\n");

    assert!(output.contains("Invalid phone number: 55"));
    assert_eq!(book.find("Bob").unwrap().phone.to_string(), "0987654321");
}

#[test]
fn test_phone_lookup() {
    let mut book = alice_and_bob();
    book.find_mut("Alice")
        .unwrap()
        .add_phone_number("1111111111")
        .unwrap();

    let output = run(&mut book, "phone\nAlice\nphone\nNobody\nexit\n");
    assert!(output.contains("Phone number(s) for Alice: 1234567890, 1111111111"));
    assert!(output.contains("Contact not found."));
}

#[test]
fn test_show_all_empty() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "show all\nexit\n");
    assert!(output.contains("No contacts found."));
}

#[test]
fn test_show_all_single_page() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "show all\nexit\n");

    assert!(output.contains("Name: Alice, Phone number(s): 1234567890\n"));
    assert!(output.contains("Name: Bob, Phone number(s): 0987654321\n"));
    assert!(!output.contains("Page 1:"));
}

#[test]
fn test_show_all_paged() {
    let mut book = numbered_book(5);
    let config = Config {
        page_size: 2,
        ..Config::default()
    };
    let output = run_script(&mut book, &MockRecordStore::new(), &config, "show all\nexit\n");

    assert!(output.contains("Page 1:\nName: Contact 0"));
    assert!(output.contains("Page 2:\nName: Contact 2"));
    assert!(output.contains("Page 3:\nName: Contact 4"));
    assert!(!output.contains("Page 4:"));
}

#[test]
fn test_search_uses_configured_phone_match() {
    let script = "search\n123\nexit\n";

    let mut book = alice_and_bob();
    let output = run(&mut book, script);
    assert!(output.contains("No contacts found."));

    let config = Config {
        phone_match: PhoneMatch::Substring,
        ..Config::default()
    };
    let mut book = alice_and_bob();
    let output = run_script(&mut book, &MockRecordStore::new(), &config, script);
    assert!(output.contains("Name: Alice, Phone number(s): 1234567890"));
}

#[test]
fn test_birthday_command() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "birthday\nAlice\n1990-05-17\nexit\n");

    assert!(output.contains("Enter birthday (YYYY-MM-DD): "));
    assert!(output.contains("Birthday set."));
    assert!(output.contains("day(s) until next birthday."));
    assert_eq!(
        book.find("Alice").unwrap().birthday.unwrap().to_string(),
        "1990-05-17"
    );
}

#[test]
fn test_birthday_command_rejects_bad_date() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "birthday\nAlice\n17.05.1990\nexit\n");

    assert!(output.contains("Invalid birthday: 17.05.1990"));
    assert!(book.find("Alice").unwrap().birthday.is_none());
}

#[test]
fn test_remove_command() {
    let mut book = alice_and_bob();
    let output = run(&mut book, "remove\nAlice\nremove\nAlice\nexit\n");

    assert!(output.contains("Contact removed successfully."));
    assert!(output.contains("Contact not found."));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_save_command_writes_store() {
    let store = MockRecordStore::new();
    let mut book = alice_and_bob();
    let output = run_script(&mut book, &store, &Config::default(), "save\nexit\n");

    assert!(output.contains("Address book saved."));
    assert_eq!(store.get_call_count("save"), 1);
    assert_eq!(store.stored().unwrap().len(), 2);
}

#[test]
fn test_save_failure_is_reported() {
    let store = MockRecordStore::new();
    store.set_failing(true);
    let mut book = alice_and_bob();
    let output = run_script(&mut book, &store, &Config::default(), "save\nhello\nexit\n");

    assert!(output.contains("Could not save address book"));
    assert!(output.contains("How can I help you?"));
}

#[test]
fn test_edits_survive_input_error_and_can_be_saved() {
    let store = MockRecordStore::new();
    let mut book = AddressBook::new();
    let input = BufReader::new(Cursor::new("add\nAlice 1234567890\n").chain(BrokenInput));
    let mut output = Vec::new();

    let err = Shell::new(&mut book, &store, &Config::default(), input, &mut output)
        .run()
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

    // The binary saves before reporting the shell error.
    assert_eq!(book.len(), 1);
    book.save_to(&store).unwrap();
    assert_eq!(store.stored().unwrap(), book.records().to_vec());
}
