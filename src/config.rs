//! Hosts table output configuration

/// Controls how a `HostTable` is built and written.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HostsConfig {
    /// If `true`, write one line for every address of a name rather than
    /// only its primary address.
    pub all_addresses: bool,
    /// Comment written as the first line of output, without the leading `#`
    pub header: Option<String>,
}

/// Returns the default configuration: primary addresses only, no header.
pub fn default_config() -> HostsConfig {
    HostsConfig {
        all_addresses: false,
        header: None,
    }
}
