//! Conversion of dig-style DNS lookup output into a hosts table.
//!
//! A `DigTable` is parsed from text such as the answer section printed by
//! `dig`, then queried for the addresses of a name, following `CNAME`
//! aliases to the final `A` records.
//!
//! ```
//! use dig2hosts::DigTable;
//!
//! let table = DigTable::parse("\
//! www.quora.com.        86389  IN  CNAME  quora.map.fastly.net.
//! quora.map.fastly.net. 19     IN  A      151.101.1.2
//! ").unwrap();
//!
//! assert_eq!(table.query_single("www.quora.com").unwrap(), "151.101.1.2");
//! ```

#![deny(missing_docs)]

#[macro_use] extern crate log;

pub use crate::config::{default_config, HostsConfig};
pub use crate::error::{Error, Result};
pub use crate::hosts::{Host, HostTable};
pub use crate::idna::to_ascii;
pub use crate::parser::{parse_entries, parse_line};
pub use crate::record::{Class, Entry, RecordType};
pub use crate::table::{load_dig, DigTable};

pub mod config;
pub mod error;
pub mod hosts;
pub mod idna;
pub mod parser;
pub mod record;
pub mod table;
