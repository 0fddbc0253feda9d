//! Network interface enumeration.
//!
//! `InterfaceEnumerator` is the only platform-facing seam of the crate.
//! `SystemInterfaces` implements it on top of `if-addrs`; tests provide
//! their own fakes.

use crate::error::EnumerationError;
use crate::types::{InterfaceAddress, NetworkInterface};

/// Lists the host's network interfaces and their bound addresses.
///
/// Implementations must preserve the order reported by the platform, both
/// across interfaces and within each interface.
pub trait InterfaceEnumerator: Send + Sync {
    fn enumerate_interfaces(&self) -> Result<Vec<NetworkInterface>, EnumerationError>;
}

/// Enumerator backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceEnumerator for SystemInterfaces {
    fn enumerate_interfaces(&self) -> Result<Vec<NetworkInterface>, EnumerationError> {
        let entries = if_addrs::get_if_addrs()?;
        let flat = entries.into_iter().map(|iface| {
            let address = InterfaceAddress {
                ip: iface.ip(),
                is_loopback: iface.is_loopback(),
            };
            (iface.name, address)
        });
        Ok(group_by_interface(flat))
    }
}

/// Groups `(name, address)` pairs into interfaces.
///
/// `if-addrs` reports one entry per address; interfaces keep the position of
/// their first entry and addresses keep their relative order.
pub(crate) fn group_by_interface(
    entries: impl IntoIterator<Item = (String, InterfaceAddress)>,
) -> Vec<NetworkInterface> {
    let mut interfaces: Vec<NetworkInterface> = Vec::new();

    for (name, address) in entries {
        match interfaces.iter_mut().find(|iface| iface.name == name) {
            Some(iface) => iface.addresses.push(address),
            None => interfaces.push(NetworkInterface::new(name, vec![address])),
        }
    }

    interfaces
}

impl<T: InterfaceEnumerator + ?Sized> InterfaceEnumerator for &T {
    fn enumerate_interfaces(&self) -> Result<Vec<NetworkInterface>, EnumerationError> {
        (**self).enumerate_interfaces()
    }
}

impl<T: InterfaceEnumerator + ?Sized> InterfaceEnumerator for Box<T> {
    fn enumerate_interfaces(&self) -> Result<Vec<NetworkInterface>, EnumerationError> {
        (**self).enumerate_interfaces()
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use super::*;

    fn v4(a: u8, b: u8, c: u8, d: u8) -> InterfaceAddress {
        InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(a, b, c, d)))
    }

    #[test]
    fn grouping_preserves_platform_order() {
        let v6 = InterfaceAddress::new(IpAddr::V6(Ipv6Addr::LOCALHOST));
        let entries = vec![
            ("lo".to_string(), v4(127, 0, 0, 1)),
            ("eth0".to_string(), v4(10, 0, 0, 5)),
            ("lo".to_string(), v6),
            ("wlan0".to_string(), v4(192, 168, 1, 7)),
            ("eth0".to_string(), v4(10, 0, 0, 6)),
        ];

        let grouped = group_by_interface(entries);
        let names: Vec<_> = grouped.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["lo", "eth0", "wlan0"]);
        assert_eq!(grouped[0].addresses, vec![v4(127, 0, 0, 1), v6]);
        assert_eq!(grouped[1].addresses, vec![v4(10, 0, 0, 5), v4(10, 0, 0, 6)]);
    }

    #[test]
    fn grouping_empty() {
        assert!(group_by_interface(Vec::new()).is_empty());
    }

    #[test]
    fn system_enumeration_does_not_panic() {
        // Sandboxed CI may have no interfaces or deny the call entirely.
        if let Ok(interfaces) = SystemInterfaces.enumerate_interfaces() {
            for iface in interfaces {
                assert!(!iface.name.is_empty());
                assert!(!iface.addresses.is_empty());
            }
        }
    }
}
