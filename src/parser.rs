//! Tokenizes dig output into records
//!
//! Data lines look like this:
//!
//! ```text
//! www.mozilla.org.        3       IN      CNAME   www.mozilla.org.cdn.cloudflare.net.
//! www.mozilla.org.cdn.cloudflare.net. 243 IN A    104.18.164.34
//! ```

use crate::error::{Error, Result};
use crate::record::{Class, Entry, RecordType};

/// Marker beginning a comment line
pub const COMMENT_MARKER: char = ';';

/// Number of fields in a data line
pub const FIELD_COUNT: usize = 5;

/// Parses a single line of dig output.
///
/// `line_no` is the 1-based position of the line and is only used in errors.
/// Comment lines and blank lines yield `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Entry>> {
    let line = line.trim();

    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    // split_whitespace collapses runs of spaces and tabs
    let fields = line.split_whitespace().collect::<Vec<_>>();

    if fields.len() < FIELD_COUNT {
        return Err(Error::MalformedLine{
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let ttl = match fields[1].parse() {
        Ok(ttl) => ttl,
        Err(_) => return Err(Error::MalformedLine{
            line: line_no,
            reason: format!("invalid TTL: {}", fields[1]),
        }),
    };

    let record_type = match RecordType::from_mnemonic(fields[3]) {
        Some(ty) => ty,
        None => return Err(Error::UnsupportedRecordType{
            line: line_no,
            record_type: fields[3].to_owned(),
        }),
    };

    Ok(Some(Entry{
        domain: fields[0].to_owned(),
        ttl: ttl,
        class: Class::from_mnemonic(fields[2]),
        record_type: record_type,
        dest: fields[4].to_owned(),
    }))
}

/// Parses every line of dig output, stopping at the first error.
///
/// Each entry is paired with its 1-based line number.
pub fn parse_entries(data: &str) -> Result<Vec<(usize, Entry)>> {
    let mut entries = Vec::new();

    for (i, line) in data.lines().enumerate() {
        match parse_line(i + 1, line)? {
            Some(entry) => entries.push((i + 1, entry)),
            None => trace!("skipping line {}", i + 1),
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::{parse_entries, parse_line};
    use crate::error::Error;
    use crate::record::{Class, RecordType};

    #[test]
    fn test_parse_line() {
        let entry = parse_line(1,
            "  www.mozilla.org.\t3\tIN   CNAME\t\twww.mozilla.org.cdn.cloudflare.net.  ")
            .unwrap().unwrap();

        assert_eq!(entry.domain, "www.mozilla.org.");
        assert_eq!(entry.ttl, 3);
        assert_eq!(entry.class, Class::Internet);
        assert_eq!(entry.record_type, RecordType::CName);
        assert_eq!(entry.dest, "www.mozilla.org.cdn.cloudflare.net.");

        // Extra trailing fields are ignored
        let entry = parse_line(1, "a.example. 60 IN A 192.0.2.1 extra").unwrap().unwrap();
        assert_eq!(entry.dest, "192.0.2.1");
    }

    #[test]
    fn test_skipped_lines() {
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(1, " \t ").unwrap().is_none());
        assert!(parse_line(1, "; comment").unwrap().is_none());
        assert!(parse_line(1, "   ;;;; <<>> DiG 9.16 <<>> example.com").unwrap().is_none());
    }

    #[test]
    fn test_malformed() {
        match parse_line(7, "example.com. 300 IN A") {
            Err(Error::MalformedLine{line: 7, ..}) => (),
            r => panic!("unexpected result: {:?}", r),
        }

        match parse_line(2, "example.com. soon IN A 192.0.2.1") {
            Err(Error::MalformedLine{line: 2, ref reason}) => assert!(reason.contains("soon")),
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_unsupported() {
        match parse_line(3, "example.com. 300 IN AAAA 2001:db8::1") {
            Err(Error::UnsupportedRecordType{line: 3, ref record_type}) =>
                assert_eq!(record_type, "AAAA"),
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_parse_entries() {
        let entries = parse_entries("\
; header
a.example. 1 IN A 192.0.2.1

b.example. 1 IN CNAME a.example.
").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 2);
        assert_eq!(entries[1].0, 4);
        assert_eq!(entries[1].1.record_type, RecordType::CName);

        match parse_entries("a.example. 1 IN A 192.0.2.1\nb.example. 1 IN MX a.example.") {
            Err(Error::UnsupportedRecordType{line: 2, ..}) => (),
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
