//! Interactive command shell.
//!
//! The shell reads one command per line and prompts for any arguments it
//! needs. It borrows the address book and the record store; both are owned by
//! the caller.

pub mod commands;
pub mod handlers;

pub use commands::Command;
pub use handlers::Shell;
