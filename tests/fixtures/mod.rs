//! Shared test data.

use address_book::{AddressBook, Birthday, Record};

/// A record with the given name and phone numbers.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone_number(phone)
            .expect("fixture phone numbers are valid");
    }
    record
}

/// A record with a birthday.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, phones: &[&str], birthday: &str) -> Record {
    let mut record = sample_record(name, phones);
    record.birthday = Some(Birthday::new(birthday).expect("fixture birthday is valid"));
    record
}

/// Alice (1234567890) and Bob (0987654321), in that order.
#[allow(dead_code)]
pub fn alice_and_bob() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["1234567890"]));
    book.add_record(sample_record("Bob", &["0987654321"]));
    book
}

/// `n` records named "Contact 0".."Contact n-1", each with a distinct number.
#[allow(dead_code)]
pub fn numbered_book(n: usize) -> AddressBook {
    (0..n)
        .map(|i| {
            let phone = format!("{:010}", i);
            sample_record(&format!("Contact {}", i), &[phone.as_str()])
        })
        .collect()
}
