//! Errors raised while building or querying a `DigTable`

use std::io;

use thiserror::Error;

/// Represents an error in parsing dig output or resolving a name.
#[derive(Debug, Error)]
pub enum Error {
    /// A data line is missing fields or carries an invalid TTL
    #[error("line {line}: malformed record: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
    /// A second `CNAME` was defined for the same name
    #[error("line {line}: CNAME for {domain} already exists")]
    DuplicateAlias {
        /// 1-based line number
        line: usize,
        /// Alias that was redefined
        domain: String,
    },
    /// A record type other than `A` or `CNAME`
    #[error("line {line}: record type {record_type} not supported")]
    UnsupportedRecordType {
        /// 1-based line number
        line: usize,
        /// Record type token as it appeared in the input
        record_type: String,
    },
    /// Neither an alias nor an address is known for the name
    #[error("no records for domain {domain}")]
    NotFound {
        /// Fully-qualified name that was looked up
        domain: String,
    },
    /// Following aliases from the name revisits a name already seen
    #[error("alias cycle detected while resolving {domain}")]
    AliasCycle {
        /// Name the query started from
        domain: String,
    },
    /// The name could not be converted to its ASCII form
    #[error("invalid domain name {domain:?}")]
    InvalidName {
        /// Name as given by the caller
        domain: String,
    },
    /// Failure reading input
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Shorthand for results carrying an `Error`.
pub type Result<T> = ::std::result::Result<T, Error>;
