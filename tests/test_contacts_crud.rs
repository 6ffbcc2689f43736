//! End-to-end tests for contact CRUD through the command interpreter.
//!
//! These drive the interpreter one line at a time, the way a user would,
//! and assert on the exact reply text.

use contact_book::{AddressBook, Interpreter, Record, Response};

fn reply(interpreter: &mut Interpreter, line: &str) -> String {
    interpreter.execute(line).message().to_string()
}

#[test]
fn test_add_then_phone_round_trips() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    assert_eq!(reply(&mut interpreter, "add alice 1234567890"), "Contact added.");
    assert_eq!(
        reply(&mut interpreter, "phone alice"),
        "Contact name: alice, phones: 1234567890"
    );
}

#[test]
fn test_add_overwrites_existing_record() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add alice 1111111111");
    reply(&mut interpreter, "add-birthday alice 05.06.2000");
    reply(&mut interpreter, "add alice 2222222222");

    // exactly one alice, old phones and birthday discarded, not merged
    assert_eq!(interpreter.book().len(), 1);
    let record = interpreter.book().find("alice").unwrap();
    let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["2222222222"]);
    assert!(record.birthday().is_none());
}

#[test]
fn test_change_replaces_phone_in_place() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add bob 1111111111");
    assert_eq!(
        reply(&mut interpreter, "change bob 1111111111 2222222222"),
        "Phone number updated."
    );

    let record = interpreter.book().find("bob").unwrap();
    assert!(record.find_phone("1111111111").is_none());
    assert_eq!(
        record.find_phone("2222222222").map(|p| p.as_str()),
        Some("2222222222")
    );
}

#[test]
fn test_change_missing_phone_or_record() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add bob 1111111111");
    assert_eq!(
        reply(&mut interpreter, "change bob 9999999999 2222222222"),
        "Phone number not found."
    );
    assert_eq!(
        reply(&mut interpreter, "change carol 1111111111 2222222222"),
        "Record not found."
    );
}

#[test]
fn test_change_rejects_invalid_new_phone() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add bob 1111111111");
    assert_eq!(
        reply(&mut interpreter, "change bob 1111111111 22"),
        "Phone number must be a 10-digit number."
    );

    // record untouched
    let record = interpreter.book().find("bob").unwrap();
    assert_eq!(record.phones()[0].as_str(), "1111111111");
}

#[test]
fn test_add_birthday_then_show_birthday_round_trips() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add alice 1234567890");
    assert_eq!(
        reply(&mut interpreter, "add-birthday alice 05.06.2000"),
        "Birthday added."
    );
    assert_eq!(
        reply(&mut interpreter, "show-birthday alice"),
        "alice's birthday: 05.06.2000"
    );
}

#[test]
fn test_show_birthday_without_one_recorded() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add alice 1234567890");
    assert_eq!(
        reply(&mut interpreter, "show-birthday alice"),
        "alice has no birthday recorded."
    );
}

#[test]
fn test_add_birthday_validation_and_missing_record() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add alice 1234567890");
    assert_eq!(
        reply(&mut interpreter, "add-birthday alice 2000-06-05"),
        "Birthday must be in format DD.MM.YYYY."
    );
    assert_eq!(
        reply(&mut interpreter, "add-birthday ghost 05.06.2000"),
        "Record not found."
    );
}

#[test]
fn test_phone_missing_record() {
    let mut interpreter = Interpreter::new(AddressBook::new());
    assert_eq!(reply(&mut interpreter, "phone nosuchname"), "Record not found.");
}

#[test]
fn test_all_lists_records_in_insertion_order() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add alice 1111111111");
    reply(&mut interpreter, "add bob 2222222222");
    reply(&mut interpreter, "add-birthday bob 01.01.1990");

    assert_eq!(
        reply(&mut interpreter, "all"),
        "Contact name: alice, phones: 1111111111\n\
         Contact name: bob, phones: 2222222222, birthday: 01.01.1990"
    );
}

#[test]
fn test_names_are_lowercased_before_storage() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    reply(&mut interpreter, "add Alice 1234567890");
    // lookup under any casing resolves to the same record
    assert_eq!(
        reply(&mut interpreter, "phone ALICE"),
        "Contact name: alice, phones: 1234567890"
    );
    assert!(interpreter.book().find("Alice").is_none());
    assert!(interpreter.book().find("alice").is_some());
}

#[test]
fn test_unknown_command_never_ends_the_loop() {
    let mut interpreter = Interpreter::new(AddressBook::new());

    assert_eq!(
        interpreter.execute("foobar"),
        Response::Continue("Invalid command.".to_string())
    );
    assert_eq!(
        interpreter.execute("add alice"),
        Response::Continue(
            "Invalid command format. Please enter 'add [name] [phone]'.".to_string()
        )
    );
    assert_eq!(
        interpreter.execute("hello"),
        Response::Continue("How can I help you?".to_string())
    );
}

#[test]
fn test_delete_removes_record() {
    let mut book = AddressBook::new();
    let mut record = Record::new("alice");
    record.add_phone("1234567890").unwrap();
    book.add_record(record);

    let removed = book.delete("alice").unwrap();
    assert_eq!(removed.name().as_str(), "alice");
    assert!(book.delete("alice").is_none());
    assert!(book.find("alice").is_none());
}
