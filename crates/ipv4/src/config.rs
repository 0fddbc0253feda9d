//! Resolver configuration.
//!
//! The embedding application owns loading (TOML, JSON, ...); this crate only
//! defines the shape and its defaults.

use serde::{Deserialize, Serialize};

/// Options for `AddressResolver`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Log every scanned candidate and the selected address at debug level.
    pub debug: bool,

    /// Also skip link-local addresses (169.254.x.x / APIPA).
    pub skip_link_local: bool,
}

impl ResolverConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_skip_link_local(mut self, skip: bool) -> Self {
        self.skip_link_local = skip;
        self
    }
}
