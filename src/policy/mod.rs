//! Cache Policy Module
//!
//! Declares how a cacheable operation builds its key and how long its
//! results live.

mod namespace;
mod time_unit;

pub use namespace::Namespace;
pub use time_unit::TimeUnit;

// == Public Constants ==
/// Inline ttl applied when a policy does not set one
pub const DEFAULT_TTL: u64 = 10;

// == Cache Policy ==
/// Immutable caching declaration attached to one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Key template; empty means "derive from tagged parameters"
    pub key_pattern: String,
    /// Inline ttl amount, used when no namespace is selected
    pub ttl: u64,
    /// Unit of the inline ttl
    pub time_unit: TimeUnit,
    /// Selected namespace, [`Namespace::DEFAULT`] when none
    pub namespace: Namespace,
}

impl CachePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.key_pattern = pattern.into();
        self
    }

    pub fn with_ttl(mut self, ttl: u64, time_unit: TimeUnit) -> Self {
        self.ttl = ttl;
        self.time_unit = time_unit;
        self
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    // == Key Prefix ==
    /// Returns the namespace whose prefix starts every key, if one is selected.
    pub fn key_prefix(&self) -> Option<&Namespace> {
        if self.namespace.is_default() {
            None
        } else {
            Some(&self.namespace)
        }
    }

    // == Value TTL ==
    /// Lifetime of a stored result: a selected namespace always wins over
    /// the inline ttl.
    pub fn value_ttl(&self) -> (u64, TimeUnit) {
        match self.key_prefix() {
            Some(ns) => (ns.ttl, ns.time_unit),
            None => (self.ttl, self.time_unit),
        }
    }

    // == Tombstone TTL ==
    /// Lifetime of a tombstone, always taken from [`Namespace::DEFAULT`].
    pub fn tombstone_ttl(&self) -> (u64, TimeUnit) {
        (Namespace::DEFAULT.ttl, Namespace::DEFAULT.time_unit)
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            key_pattern: String::new(),
            ttl: DEFAULT_TTL,
            time_unit: TimeUnit::Seconds,
            namespace: Namespace::DEFAULT,
        }
    }
}
