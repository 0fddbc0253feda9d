//! Integer to dotted-quad conversion.
//!
//! The integer's big-endian bytes are emitted in reverse order, so the
//! least-significant byte becomes the first octet. Existing callers depend
//! on this order; changing it would alter every derived address string.

use crate::validate::parse_octets;

/// Converts a 32-bit address integer into dotted-quad text.
///
/// Negative values decompose via two's complement.
///
/// ```
/// assert_eq!(jobtools_ipv4::address_from_int(0x0101_A8C0), "192.168.1.1");
/// assert_eq!(jobtools_ipv4::address_from_int(-1), "255.255.255.255");
/// ```
pub fn address_from_int(value: i32) -> String {
    address_from_u32(value as u32)
}

/// Unsigned form of [`address_from_int`].
pub fn address_from_u32(value: u32) -> String {
    let mut octets = value.to_be_bytes();
    octets.reverse();
    octets
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Inverse of [`address_from_int`]. Returns `None` unless `text` is a valid
/// dotted-quad.
pub fn address_to_int(text: &str) -> Option<i32> {
    let mut octets = parse_octets(text)?;
    octets.reverse();
    Some(i32::from_be_bytes(octets))
}
