use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// Fallback returned when no usable interface address is found.
pub const LOOPBACK: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// An address bound to an interface, as seen during a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub ip: IpAddr,
    pub is_loopback: bool,
}

impl InterfaceAddress {
    /// Creates an entry whose loopback flag is derived from the address.
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            is_loopback: ip.is_loopback(),
        }
    }

    /// Returns the IPv4 address this entry carries, if it is IPv4-shaped.
    ///
    /// An address counts as IPv4-shaped when its textual form contains a
    /// `.`. Plain IPv6 text only uses `:`, while IPv4-mapped IPv6 addresses
    /// (`::ffff:a.b.c.d`) yield their embedded IPv4 address.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => {
                if v6.to_string().contains('.') {
                    v6.to_ipv4_mapped()
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_loopback {
            write!(f, "{} (loopback)", self.ip)
        } else {
            write!(f, "{}", self.ip)
        }
    }
}

/// A network interface and its bound addresses in platform order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, addresses: Vec<InterfaceAddress>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn loopback_flag_follows_address() {
        assert!(InterfaceAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST)).is_loopback);
        assert!(InterfaceAddress::new(IpAddr::V6(Ipv6Addr::LOCALHOST)).is_loopback);
        assert!(!InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))).is_loopback);
    }

    #[test]
    fn ipv4_shape() {
        let v4 = InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(v4.ipv4(), Some(Ipv4Addr::new(10, 0, 0, 5)));

        let v6: Ipv6Addr = "fe80::1".parse().unwrap();
        assert_eq!(InterfaceAddress::new(IpAddr::V6(v6)).ipv4(), None);

        let mapped = Ipv4Addr::new(192, 168, 1, 9).to_ipv6_mapped();
        assert_eq!(
            InterfaceAddress::new(IpAddr::V6(mapped)).ipv4(),
            Some(Ipv4Addr::new(192, 168, 1, 9))
        );
    }

    #[test]
    fn display_marks_loopback() {
        let lo = InterfaceAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(lo.to_string(), "127.0.0.1 (loopback)");
        let eth = InterfaceAddress::new(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)));
        assert_eq!(eth.to_string(), "10.1.2.3");
    }
}
