use std::net::Ipv4Addr;

use crate::config::ResolverConfig;
use crate::enumerator::{InterfaceEnumerator, SystemInterfaces};
use crate::types::{InterfaceAddress, LOOPBACK};

/// Resolves the host's local IPv4 address and values derived from it.
///
/// Holds no state besides its enumerator and configuration; every call
/// rescans the interfaces.
#[derive(Debug, Clone, Default)]
pub struct AddressResolver<E = SystemInterfaces> {
    enumerator: E,
    config: ResolverConfig,
}

impl AddressResolver<SystemInterfaces> {
    /// Creates a resolver over the operating system's interfaces.
    pub fn system() -> Self {
        Self::new(SystemInterfaces, ResolverConfig::default())
    }
}

impl<E: InterfaceEnumerator> AddressResolver<E> {
    pub fn new(enumerator: E, config: ResolverConfig) -> Self {
        Self { enumerator, config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the first non-loopback IPv4 address, or `127.0.0.1`.
    ///
    /// Interfaces and their addresses are scanned in platform order and the
    /// first match wins. Enumeration failures are logged and fall back to
    /// loopback; this never fails.
    pub fn local_address(&self) -> Ipv4Addr {
        let interfaces = match self.enumerator.enumerate_interfaces() {
            Ok(interfaces) => interfaces,
            Err(e) => {
                tracing::warn!("interface enumeration failed: {e}, using loopback");
                return LOOPBACK;
            }
        };

        for iface in &interfaces {
            for address in &iface.addresses {
                if let Some(ip) = self.candidate(address) {
                    if self.config.debug {
                        tracing::debug!(interface = %iface.name, address = %ip, "selected local address");
                    }
                    return ip;
                }
                if self.config.debug {
                    tracing::debug!(interface = %iface.name, address = %address, "skipped address");
                }
            }
        }

        tracing::debug!(
            interfaces = interfaces.len(),
            "no usable IPv4 address, using loopback"
        );
        LOOPBACK
    }

    /// Returns the first three octets of [`local_address`](Self::local_address),
    /// e.g. `"192.168.1"`.
    pub fn subnet_prefix(&self) -> String {
        subnet_prefix_of(&self.local_address().to_string())
    }

    /// Appends `suffix` to [`subnet_prefix`](Self::subnet_prefix) as text.
    ///
    /// No separator is inserted and nothing is added numerically: a prefix of
    /// `"192.168.1"` and suffix `5` give `"192.168.15"`.
    pub fn address_with_suffix(&self, suffix: i32) -> String {
        format!("{}{suffix}", self.subnet_prefix())
    }

    fn candidate(&self, address: &InterfaceAddress) -> Option<Ipv4Addr> {
        if address.is_loopback {
            return None;
        }
        let ip = address.ipv4()?;
        // Mapped loopback (::ffff:127.x) is not flagged by the platform.
        if ip.is_loopback() {
            return None;
        }
        if self.config.skip_link_local && ip.is_link_local() {
            return None;
        }
        Some(ip)
    }
}

fn subnet_prefix_of(address: &str) -> String {
    address.split('.').take(3).collect::<Vec<_>>().join(".")
}

/// [`AddressResolver::local_address`] over the system interfaces.
pub fn local_address() -> Ipv4Addr {
    AddressResolver::system().local_address()
}

/// [`AddressResolver::subnet_prefix`] over the system interfaces.
pub fn subnet_prefix() -> String {
    AddressResolver::system().subnet_prefix()
}

/// [`AddressResolver::address_with_suffix`] over the system interfaces.
pub fn address_with_suffix(suffix: i32) -> String {
    AddressResolver::system().address_with_suffix(suffix)
}
