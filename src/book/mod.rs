//! The in-memory address book and its paging iterator.

pub mod address_book;
pub mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
