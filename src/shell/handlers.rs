//! Command handlers for the interactive shell.

use super::commands::Command;
use crate::book::AddressBook;
use crate::config::Config;
use crate::error::AddressBookError;
use crate::models::Record;
use crate::repositories::RecordStore;
use crate::search::PhoneMatch;
use std::io::{self, BufRead, Write};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads commands from `input`, applies them to the address book and writes
/// replies to `output`.
pub struct Shell<'a, R, W> {
    book: &'a mut AddressBook,
    store: &'a dyn RecordStore,
    page_size: usize,
    phone_match: PhoneMatch,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        book: &'a mut AddressBook,
        store: &'a dyn RecordStore,
        config: &Config,
        input: R,
        output: W,
    ) -> Self {
        Self {
            book,
            store,
            page_size: config.page_size.max(1),
            phone_match: config.phone_match,
            input,
            output,
        }
    }

    /// Run until an exit command or end of input.
    ///
    /// Only I/O failures on `input`/`output` end the loop with an error; bad
    /// user input is reported and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("Shell started with {} records", self.book.len());

        loop {
            let Some(line) = self.ask("Enter a command: ")? else {
                break;
            };

            let command = Command::parse(&line);
            tracing::debug!("Command: {:?}", command);

            if self.dispatch(command)? == Flow::Exit {
                break;
            }
        }

        tracing::info!("Shell finished with {} records", self.book.len());
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Hello => {
                self.say("How can I help you?")?;
                Ok(Flow::Continue)
            }
            Command::Add => self.add_contact(),
            Command::Change => self.change_phone(),
            Command::Phone => self.show_phone(),
            Command::ShowAll => self.show_all(),
            Command::Search => self.search(),
            Command::Birthday => self.set_birthday(),
            Command::Remove => self.remove_contact(),
            Command::Save => self.save(),
            Command::Exit => {
                self.say("Good bye!")?;
                Ok(Flow::Exit)
            }
            Command::Unknown(_) => {
                self.say("Invalid command. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<Flow> {
        let Some(line) = self.ask("Enter name and phone number: ")? else {
            return Ok(Flow::Exit);
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [name, phone] = parts.as_slice() else {
            tracing::warn!("Malformed add input: {:?}", line);
            self.say("Please enter a name and a phone number separated by a space.")?;
            return Ok(Flow::Continue);
        };

        let mut record = Record::new(*name);
        if let Err(e) = record.add_phone_number(phone) {
            tracing::warn!("Rejected contact {}: {}", name, e);
            self.say(&e.to_string())?;
            return Ok(Flow::Continue);
        }

        self.book.add_record(record);
        self.say("Contact added successfully.")?;
        Ok(Flow::Continue)
    }

    fn change_phone(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };

        if self.book.find(&name).is_none() {
            self.say("Contact not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(new_phone) = self.ask("Enter new phone number: ")? else {
            return Ok(Flow::Exit);
        };

        let result = match self.book.find_mut(&name) {
            Some(record) => record.replace_phone_number(new_phone.trim()),
            None => return Ok(Flow::Continue),
        };

        match result {
            Ok(()) => self.say("Phone number changed successfully.")?,
            Err(e) => {
                tracing::warn!("Rejected phone change for {}: {}", name, e);
                self.say(&e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_phone(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };

        let reply = match self.book.find(&name) {
            Some(record) => format!("Phone number(s) for {}: {}", name, record.phone),
            None => "Contact not found.".to_string(),
        };
        self.say(&reply)?;
        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> io::Result<Flow> {
        if self.book.is_empty() {
            self.say("No contacts found.")?;
            return Ok(Flow::Continue);
        }

        let pages = match self.book.iterator(self.page_size) {
            Ok(pages) => pages,
            Err(e) => {
                self.say(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let paged = pages.len() > 1;
        for (index, page) in pages.enumerate() {
            if paged {
                self.say(&format!("Page {}:", index + 1))?;
            }
            for record in &page {
                self.say(&describe(record))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(query) = self.ask("Enter search query: ")? else {
            return Ok(Flow::Exit);
        };

        let lines: Vec<String> = self
            .book
            .search_with(&query, self.phone_match)
            .into_iter()
            .map(describe)
            .collect();

        if lines.is_empty() {
            self.say("No contacts found.")?;
        }
        for line in &lines {
            self.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn set_birthday(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };

        if self.book.find(&name).is_none() {
            self.say("Contact not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(date) = self.ask("Enter birthday (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        let result = match self.book.find_mut(&name) {
            Some(record) => record
                .set_birthday(date.trim())
                .map(|()| record.days_to_birthday()),
            None => return Ok(Flow::Continue),
        };

        match result {
            Ok(Some(days)) => {
                self.say(&format!("Birthday set. {} day(s) until next birthday.", days))?
            }
            Ok(None) => self.say("Birthday set.")?,
            Err(e) => {
                tracing::warn!("Rejected birthday for {}: {}", name, e);
                self.say(&e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_contact(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.book.remove_by_name(&name) {
            Ok(_) => self.say("Contact removed successfully.")?,
            Err(AddressBookError::NotFound(_)) => self.say("Contact not found.")?,
            Err(e) => self.say(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> io::Result<Flow> {
        match self.book.save_to(self.store) {
            Ok(()) => self.say("Address book saved.")?,
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                self.say(&format!("Could not save address book: {}", e))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// One-line summary used by `show all` and `search`.
fn describe(record: &Record) -> String {
    let mut line = format!("Name: {}, Phone number(s): {}", record.name, record.phone);
    if let Some(birthday) = record.birthday {
        line.push_str(&format!(", Birthday: {}", birthday));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Birthday;

    #[test]
    fn test_describe_without_birthday() {
        let mut record = Record::new("Alice");
        record.add_phone_number("1234567890").unwrap();
        record.add_phone_number("0987654321").unwrap();
        assert_eq!(
            describe(&record),
            "Name: Alice, Phone number(s): 1234567890, 0987654321"
        );
    }

    #[test]
    fn test_describe_with_birthday() {
        let record = Record::with_birthday("Bob", Birthday::new("1990-05-17").unwrap());
        assert_eq!(
            describe(&record),
            "Name: Bob, Phone number(s): , Birthday: 1990-05-17"
        );
    }
}
