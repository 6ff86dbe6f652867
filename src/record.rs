//! DNS resource record types as they appear in dig output

use std::fmt;

/// Represents the class of a record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Class {
    /// Internet (`IN`)
    Internet,
    /// Any other class token
    Other(String),
}

impl Class {
    /// Converts a mnemonic to a `Class`.
    pub fn from_mnemonic(s: &str) -> Class {
        match s {
            "IN" => Class::Internet,
            other => Class::Other(other.to_owned()),
        }
    }

    /// Returns the mnemonic for a `Class`.
    pub fn mnemonic(&self) -> &str {
        match *self {
            Class::Internet => "IN",
            Class::Other(ref s) => s,
        }
    }
}

/// Represents the type of data in a record.
///
/// Only the types a `DigTable` can hold are represented; any other token
/// is rejected when a line is parsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RecordType {
    /// An IPv4 host address
    A,
    /// Canonical name for an alias
    CName,
}

macro_rules! record_types {
    ( $( $name:ident => $mnemonic:literal , )+ ) => {
        impl RecordType {
            /// Converts a mnemonic to a `RecordType`.
            ///
            /// Returns `None` if the type is not supported.
            pub fn from_mnemonic(s: &str) -> Option<RecordType> {
                match s {
                    $( $mnemonic => Some(RecordType::$name) , )+
                    _ => None,
                }
            }

            /// Returns the mnemonic for a `RecordType`.
            pub fn mnemonic(&self) -> &'static str {
                match *self {
                    $( RecordType::$name => $mnemonic , )+
                }
            }
        }
    }
}

record_types!{
    A => "A",
    CName => "CNAME",
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single data line of dig output, split into named fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// Owner name, fully-qualified
    pub domain: String,
    /// Time to live, in seconds
    pub ttl: i64,
    /// Record class
    pub class: Class,
    /// Record type
    pub record_type: RecordType,
    /// Record data: an address for `A`, a target name for `CNAME`
    pub dest: String,
}
