//! Builds a name table from dig output and resolves names against it

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::idna::to_ascii;
use crate::parser::parse_entries;
use crate::record::{Class, RecordType};

/// Separator terminating a fully-qualified name
pub const ROOT: char = '.';

/// Holds the alias and address relations read from dig output.
///
/// A `DigTable` is never modified after it is parsed.
#[derive(Clone, Debug, Default)]
pub struct DigTable {
    /// Fully-qualified name to ordered addresses; first address is primary
    addresses: HashMap<String, Vec<String>>,
    /// Fully-qualified alias to its canonical name
    aliases: HashMap<String, String>,
}

impl DigTable {
    /// Parses dig output into a `DigTable`.
    ///
    /// Fails on the first malformed line, unsupported record type, or
    /// repeated `CNAME` for a name. No table is returned in that case.
    pub fn parse(data: &str) -> Result<DigTable> {
        let mut table = DigTable::default();

        for (line, entry) in parse_entries(data)? {
            if entry.class != Class::Internet {
                warn!("line {}: unexpected class {} for {}",
                    line, entry.class.mnemonic(), entry.domain);
            }

            match entry.record_type {
                RecordType::A => {
                    debug!("{} has address {} (ttl {})", entry.domain, entry.dest, entry.ttl);
                    table.addresses.entry(entry.domain)
                        .or_insert_with(Vec::new)
                        .push(entry.dest);
                }
                RecordType::CName => {
                    if table.aliases.contains_key(&entry.domain) {
                        return Err(Error::DuplicateAlias{
                            line: line,
                            domain: entry.domain,
                        });
                    }
                    debug!("{} is an alias for {} (ttl {})", entry.domain, entry.dest, entry.ttl);
                    table.aliases.insert(entry.domain, entry.dest);
                }
            }
        }

        info!("parsed {} aliases and {} addressed names",
            table.aliases.len(), table.addresses.len());

        Ok(table)
    }

    /// Returns all addresses for the given name, following aliases.
    ///
    /// The name may omit the trailing `.`. A name that is not a key as given
    /// is retried in its ASCII (IDNA) form, so Unicode queries find punycode
    /// records. If a name is both an alias and directly addressed, the alias
    /// is followed.
    pub fn query(&self, domain: &str) -> Result<&[String]> {
        let start = self.lookup_name(domain)?;
        let mut name = &start[..];
        let mut hops = 0;

        while let Some(target) = self.aliases.get(name) {
            // An acyclic chain cannot be longer than the number of aliases
            if hops == self.aliases.len() {
                return Err(Error::AliasCycle{domain: start});
            }
            hops += 1;
            debug!("following alias {} -> {}", name, target);
            name = &target[..];
        }

        match self.addresses.get(name) {
            Some(addrs) => Ok(&addrs[..]),
            None => Err(Error::NotFound{domain: name.to_owned()}),
        }
    }

    /// Returns the primary address for the given name, following aliases.
    pub fn query_single(&self, domain: &str) -> Result<&str> {
        let addrs = self.query(domain)?;

        match addrs.first() {
            Some(addr) => Ok(&addr[..]),
            None => Err(Error::NotFound{domain: domain.to_owned()}),
        }
    }

    /// Resolves every known name, aliases and addressed names alike.
    ///
    /// Keys are returned without the trailing `.`.
    pub fn dump(&self) -> Result<BTreeMap<String, Vec<String>>> {
        let mut out = BTreeMap::new();

        for domain in self.aliases.keys().chain(self.addresses.keys()) {
            let addrs = self.query(domain)?;
            out.insert(strip_root(domain).to_owned(), addrs.to_vec());
        }

        Ok(out)
    }

    /// Returns the fully-qualified key to start a query from.
    fn lookup_name(&self, domain: &str) -> Result<String> {
        let name = qualify(domain);

        if self.contains(&name) {
            return Ok(name);
        }

        let ascii = qualify(&to_ascii(domain)?);
        if ascii != name {
            debug!("retrying {} as {}", name, ascii);
        }
        Ok(ascii)
    }

    fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(name) || self.addresses.contains_key(name)
    }

    /// Returns an iterator over `(alias, canonical name)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item=(&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&k[..], &v[..]))
    }

    /// Returns an iterator over names with address records and their addresses.
    pub fn addresses(&self) -> impl Iterator<Item=(&str, &[String])> {
        self.addresses.iter().map(|(k, v)| (&k[..], &v[..]))
    }

    /// Returns the number of distinct names in the table.
    pub fn len(&self) -> usize {
        self.aliases.len() +
            self.addresses.keys().filter(|k| !self.aliases.contains_key(*k)).count()
    }

    /// Returns whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.addresses.is_empty()
    }
}

impl FromStr for DigTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<DigTable> {
        DigTable::parse(s)
    }
}

/// Loads a `DigTable` from the given filename.
///
/// If an error is encountered in opening the file or reading its contents
/// or if the contents are malformed, the error is returned.
pub fn load_dig(path: &Path) -> Result<DigTable> {
    let mut f = File::open(path)?;
    let mut buf = String::new();

    f.read_to_string(&mut buf)?;
    info!("read {} bytes from {}", buf.len(), path.display());
    DigTable::parse(&buf)
}

/// Returns the name with a trailing `.`.
fn qualify(domain: &str) -> String {
    let mut name = domain.to_owned();

    if !name.ends_with(ROOT) {
        name.push(ROOT);
    }

    name
}

fn strip_root(domain: &str) -> &str {
    match domain.strip_suffix(ROOT) {
        Some(name) => name,
        None => domain,
    }
}
