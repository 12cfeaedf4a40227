// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email List Cleanup
//!
//! Extracts and normalizes the email addresses buried in free-form text:
//! spreadsheet-pasted columns, mail-header style `"Name" <addr@domain>`
//! entries, comma/semicolon/whitespace separated lists, and text mixed
//! with non-address content.
//!
//! # Features
//!
//! - Tolerant field tokenization over real-world pasted input
//! - Strict address validation after lowercasing and diacritic folding
//! - Display-name extraction from quoted and angled header forms
//! - Optional display-name synthesis from the local part
//! - Rejected garbage reported on the `tracing` channel, never in the result
//!
//! # Example
//!
//! ```rust
//! use email_cleanup::{clean_up_email_list, CleanupOptions};
//!
//! let list = clean_up_email_list(
//!     "Jane Doe <jane@example.COM>; junk; bob@mail.org",
//!     CleanupOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(list[0], "\"Jane Doe\" <jane@example.com>");
//! assert_eq!(list[1], "bob@mail.org");
//! ```

mod cleaner;
mod diacritics;
mod error;
mod grammar;
mod names;
mod tokenizer;
mod types;

pub use cleaner::{clean_up_email_list, clean_up_single_address};
pub use error::{CleanupError, Result};
pub use grammar::is_email;
pub use names::generate_display_name;
pub use types::{CleanupOptions, EmailEntry};
