//! Named constant sets bundling a key prefix with a default lifetime.

use super::TimeUnit;

// == Namespace ==
/// A named cache namespace.
///
/// When selected by a policy, the namespace contributes its key prefix and
/// overrides the policy's inline ttl. [`Namespace::DEFAULT`] means "no
/// namespace selected" and also supplies the lifetime of tombstones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    pub name: &'static str,
    pub key_prefix: &'static str,
    pub ttl: u64,
    pub time_unit: TimeUnit,
}

impl Namespace {
    pub const DEFAULT: Namespace = Namespace {
        name: "DEFAULT",
        key_prefix: "",
        ttl: 60,
        time_unit: TimeUnit::Seconds,
    };

    /// Declares a namespace. Prefixes conventionally end with `:`.
    pub const fn new(
        name: &'static str,
        key_prefix: &'static str,
        ttl: u64,
        time_unit: TimeUnit,
    ) -> Self {
        Self {
            name,
            key_prefix,
            ttl,
            time_unit,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::DEFAULT
    }
}
