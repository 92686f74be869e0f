//! Extracts structured translations from WordReference results pages.
//!
//! A results page lists its principal translations in a `<table class="WRD">`. The rows of that
//! table are grouped per headword, and each group becomes one [`Translation`]:
//!
//! ```
//! use wordreference::{Direction, parse_document};
//!
//! let html = r#"
//!     <table class="WRD">
//!       <tr class="wrtopsection"><td colspan="3" id="regular">Principal Translations</td></tr>
//!       <tr id="enes:2140">
//!         <td class="FrWrd"><strong>cool</strong> <em>adj</em></td>
//!         <td>(slightly cold)</td>
//!         <td class="ToWrd">fresco/a <em>adj</em></td>
//!       </tr>
//!     </table>"#;
//! let translations = parse_document(html, Direction::ENGLISH_SPANISH);
//!
//! assert_eq!(translations[0].source.text, "cool");
//! assert_eq!(translations[0].source.definition, "slightly cold");
//! assert_eq!(translations[0].targets[0].text, "fresco/a");
//! ```

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

#[cfg(feature = "client")]
pub mod client;
mod direction;
mod document;
mod error;
mod log;
mod row;
mod table;
mod text;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
pub use direction::{Direction, Language};
pub use document::{Parser, build_translation, parse_document, try_parse_document};
pub use error::{Error, Malformed};
pub use row::Row;
pub use table::{Section, group_rows, select_section_tables, select_tables};
pub use text::sanitize;
pub use types::{FromWord, ToWord, Translation};
