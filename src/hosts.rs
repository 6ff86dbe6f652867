//! Renders resolved names in the hosts file format

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::config::HostsConfig;

/// Represents a host table, consisting of addresses mapped to names.
#[derive(Clone, Debug, Default)]
pub struct HostTable {
    /// Contained hosts, in output order
    pub hosts: Vec<Host>,
    /// Comment written before the hosts
    pub header: Option<String>,
}

impl HostTable {
    /// Builds a host table from the output of `DigTable::dump`.
    ///
    /// Names without any address are left out.
    pub fn from_dump(dump: &BTreeMap<String, Vec<String>>, config: &HostsConfig) -> HostTable {
        let mut hosts = Vec::new();

        for (name, addrs) in dump {
            let addrs = if config.all_addresses {
                &addrs[..]
            } else {
                &addrs[..addrs.len().min(1)]
            };

            if addrs.is_empty() {
                warn!("no address for {}", name);
            }

            hosts.extend(addrs.iter().map(|addr| Host{
                address: addr.clone(),
                name: name.clone(),
            }));
        }

        HostTable{
            hosts: hosts,
            header: config.header.clone(),
        }
    }

    /// Returns the address for the first host matching the given name.
    ///
    /// If no match is found, `None` is returned.
    pub fn find_address(&self, name: &str) -> Option<&str> {
        self.hosts.iter().find(|h| h.name == name).map(|h| &h.address[..])
    }

    /// Returns the name for the first host matching the given address.
    ///
    /// If no match is found, `None` is returned.
    pub fn find_name(&self, addr: &str) -> Option<&str> {
        self.hosts.iter().find(|h| h.address == addr).map(|h| &h.name[..])
    }

    /// Writes the table in hosts file format.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl fmt::Display for HostTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref header) = self.header {
            writeln!(f, "# {}", header)?;
        }

        for host in &self.hosts {
            writeln!(f, "{}", host)?;
        }

        Ok(())
    }
}

/// Represents a single line within a host table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Host {
    /// Host address
    pub address: String,
    /// Host name, without the trailing `.`
    pub name: String,
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.address, self.name)
    }
}
