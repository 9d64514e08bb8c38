//! Key Template Module
//!
//! Derives default key patterns and resolves patterns into store keys.

use once_cell::sync::Lazy;
use regex::Regex;

use super::params::{Bindings, Signature};
use crate::error::{CacheError, Result};
use crate::policy::Namespace;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex is valid"));

// == Derive Pattern ==
/// Builds `{a}:{b}` from the tagged parameters in declaration order.
///
/// Untagged parameters are skipped; with no tagged parameter the result is
/// empty.
pub fn derive_pattern(signature: &Signature) -> String {
    signature
        .params()
        .iter()
        .filter_map(|p| p.key_name())
        .map(|name| format!("{{{}}}", name))
        .collect::<Vec<_>>()
        .join(":")
}

// == Placeholders ==
/// Placeholder names in order of appearance, duplicates included.
pub fn placeholders(pattern: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// == Resolve ==
/// Resolves a pattern into a store key.
///
/// The key is the namespace prefix (if any) followed by the `:`-joined values
/// of every placeholder, in order. Literal text in the pattern is not copied,
/// and the first value directly follows the prefix.
///
/// # Errors
/// - `Binding` if a placeholder has no bound value
pub fn resolve(pattern: &str, bindings: &Bindings, prefix: Option<&Namespace>) -> Result<String> {
    let mut key = prefix.map(|ns| ns.key_prefix.to_string()).unwrap_or_default();

    for (i, name) in placeholders(pattern).enumerate() {
        let value = bindings
            .get(name)
            .ok_or_else(|| CacheError::Binding(format!("unbound placeholder: {}", name)))?;
        if i > 0 {
            key.push(':');
        }
        key.push_str(value.render());
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{bind, Arg, ParamSpec};
    use crate::policy::TimeUnit;

    fn bindings(pairs: &[(&str, Arg)]) -> Bindings {
        let mut b = Bindings::new();
        for (name, value) in pairs {
            b.insert(*name, value.clone());
        }
        b
    }

    #[test]
    fn test_literal_text_is_not_copied() {
        let b = bindings(&[("id", Arg::from(42))]);
        assert_eq!(resolve("user:{id}", &b, None).unwrap(), "42");
    }

    #[test]
    fn test_prefix_then_first_value() {
        const U: Namespace = Namespace::new("U", "U", 1, TimeUnit::Minutes);
        let b = bindings(&[("id", Arg::from(7))]);
        assert_eq!(resolve("{id}", &b, Some(&U)).unwrap(), "U7");
    }

    #[test]
    fn test_values_joined_in_pattern_order() {
        let b = bindings(&[("a", Arg::from(1)), ("b", Arg::from(2))]);
        assert_eq!(resolve("{a}:{b}", &b, None).unwrap(), "1:2");
        assert_eq!(resolve("{b}-{a}", &b, None).unwrap(), "2:1");
    }

    #[test]
    fn test_null_value_renders_null() {
        let b = bindings(&[("a", Arg::null()), ("b", Arg::from("x"))]);
        assert_eq!(resolve("{a}{b}", &b, None).unwrap(), "null:x");
    }

    #[test]
    fn test_unbound_placeholder() {
        let b = bindings(&[("a", Arg::from(1))]);
        let result = resolve("{a}:{zzz}", &b, None);
        assert!(matches!(result, Err(CacheError::Binding(msg)) if msg.contains("zzz")));
    }

    #[test]
    fn test_pattern_without_placeholders() {
        const N: Namespace = Namespace::new("N", "n:", 1, TimeUnit::Minutes);
        let b = bindings(&[("a", Arg::from(1))]);
        assert_eq!(resolve("static", &b, None).unwrap(), "");
        assert_eq!(resolve("static", &b, Some(&N)).unwrap(), "n:");
    }

    #[test]
    fn test_derive_pattern_skips_untagged() {
        let sig = Signature::new([
            ParamSpec::tagged("team"),
            ParamSpec::plain("verbose"),
            ParamSpec::aliased("login", "name"),
            ParamSpec::plain("name"),
        ]);
        assert_eq!(derive_pattern(&sig), "{team}:{name}");
    }

    #[test]
    fn test_derive_pattern_empty_without_tags() {
        let sig = Signature::new([ParamSpec::plain("id")]);
        assert_eq!(derive_pattern(&sig), "");
    }

    #[test]
    fn test_derive_then_resolve() {
        let sig = Signature::new([ParamSpec::tagged("id"), ParamSpec::tagged("lang")]);
        let b = bind(&sig, &[Arg::from(5), Arg::from("en")]).unwrap();
        assert_eq!(resolve(&derive_pattern(&sig), &b, None).unwrap(), "5:en");
    }
}
