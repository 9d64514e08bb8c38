//! Cached Operation Module
//!
//! Pairs an operation's policy with its parameter metadata, fixed once at
//! declaration.

use crate::error::{CacheError, Result};
use crate::key::{bind, derive_pattern, resolve, Arg, Signature};
use crate::policy::CachePolicy;

// == Cached Operation ==
/// A cacheable operation: its name, policy, signature and effective key
/// pattern.
#[derive(Debug, Clone)]
pub struct CachedOperation {
    name: String,
    policy: CachePolicy,
    signature: Signature,
    pattern: String,
}

impl CachedOperation {
    /// Declares an operation.
    ///
    /// An empty policy pattern is replaced by one derived from the tagged
    /// parameters.
    ///
    /// # Errors
    /// - `Configuration` if neither the policy nor the signature yields a
    ///   pattern
    pub fn new(name: impl Into<String>, policy: CachePolicy, signature: Signature) -> Result<Self> {
        let name = name.into();
        let pattern = if policy.key_pattern.is_empty() {
            derive_pattern(&signature)
        } else {
            policy.key_pattern.clone()
        };

        if pattern.is_empty() {
            return Err(CacheError::Configuration(format!(
                "no cache key source configured for '{}'",
                name
            )));
        }

        Ok(Self {
            name,
            policy,
            signature,
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// The explicit or derived key pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    // == Cache Key ==
    /// Binds `args` and resolves the store key for one call.
    pub fn cache_key(&self, args: &[Arg]) -> Result<String> {
        let bindings = bind(&self.signature, args)?;
        resolve(&self.pattern, &bindings, self.policy.key_prefix())
    }
}
