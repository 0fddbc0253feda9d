//! Dotted-quad validation.

/// Returns true if `text` is a well-formed dotted-quad IPv4 address.
///
/// Exactly four `.`-separated segments, each a plain base-10 integer in
/// `0..=255`. Signs and whitespace are rejected; leading zeros are not.
pub fn is_valid_address(text: Option<&str>) -> bool {
    text.and_then(parse_octets).is_some()
}

/// Parses a dotted-quad into its octets, most-significant first.
pub(crate) fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut segments = text.split('.');

    for octet in &mut octets {
        *octet = parse_segment(segments.next()?)?;
    }

    match segments.next() {
        Some(_) => None,
        None => Some(octets),
    }
}

fn parse_segment(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros can make a segment arbitrarily long.
    let digits = segment.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}
