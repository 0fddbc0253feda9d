//! Local IPv4 address helpers.
//!
//! Finds the host's first usable IPv4 address, derives its subnet prefix,
//! converts packed integers to dotted-quad text and validates dotted-quads.
//! Only [`local_address`] and the functions built on it touch the operating
//! system, through a single interface enumeration call per invocation.

pub mod config;
pub mod convert;
pub mod enumerator;
pub mod error;
pub mod resolver;
pub mod types;
pub mod validate;

// Re-export primary types.
pub use config::ResolverConfig;
pub use convert::{address_from_int, address_from_u32, address_to_int};
pub use enumerator::{InterfaceEnumerator, SystemInterfaces};
pub use error::EnumerationError;
pub use resolver::{AddressResolver, address_with_suffix, local_address, subnet_prefix};
pub use types::{InterfaceAddress, LOOPBACK, NetworkInterface};
pub use validate::is_valid_address;
