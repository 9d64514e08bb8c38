//! Parameter Binding Module
//!
//! Describes an operation's parameters and binds call-time arguments to the
//! names a key template refers to.

use std::fmt::{self, Display};

use crate::error::{CacheError, Result};

// == Arg ==
/// The string rendition of one call-time argument, or null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg(Option<String>);

impl Arg {
    pub fn null() -> Self {
        Arg(None)
    }

    pub fn optional<T: Display>(value: Option<T>) -> Self {
        Arg(value.map(|v| v.to_string()))
    }

    /// Renders the value as it appears inside a key; null renders as `null`.
    pub fn render(&self) -> &str {
        self.0.as_deref().unwrap_or("null")
    }
}

impl<T: Display> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg(Some(value.to_string()))
    }
}

// == Cache Param ==
/// Marks a parameter as a key source, optionally under another declared name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheParam {
    /// Name override; empty keeps the declared name
    pub alias: String,
}

// == Param Spec ==
/// A formal parameter of a cacheable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub cache_param: Option<CacheParam>,
}

impl ParamSpec {
    /// A parameter that is not a key source.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache_param: None,
        }
    }

    /// A key source bound under its declared name.
    pub fn tagged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache_param: Some(CacheParam::default()),
        }
    }

    /// A key source bound under `alias`, which must be a declared name.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache_param: Some(CacheParam {
                alias: alias.into(),
            }),
        }
    }

    /// Name this parameter contributes to a derived pattern, if tagged.
    pub fn key_name(&self) -> Option<&str> {
        self.cache_param.as_ref().map(|tag| {
            if tag.alias.is_empty() {
                self.name.as_str()
            } else {
                tag.alias.as_str()
            }
        })
    }
}

// == Signature ==
/// Ordered formal parameters of one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Vec<ParamSpec>,
}

impl Signature {
    pub fn new(params: impl IntoIterator<Item = ParamSpec>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }
}

// == Bindings ==
/// Ordered name to argument mapping built for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, Arg)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, overwriting in place if it is already bound.
    pub fn insert(&mut self, name: impl Into<String>, value: Arg) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(n, v)| format!("{}={}", n, v.render()))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

// == Bind ==
/// Binds each tagged argument to its parameter's name, or to the
/// parameter's alias when one is given. Untagged parameters are not bound.
///
/// # Errors
/// - `Binding` if the argument count differs from the parameter count, or
///   an alias is not one of the signature's declared names
/// - `Configuration` if no parameter is tagged
pub fn bind(signature: &Signature, args: &[Arg]) -> Result<Bindings> {
    if signature.len() != args.len() {
        return Err(CacheError::Binding(format!(
            "expected {} arguments, got {}",
            signature.len(),
            args.len()
        )));
    }

    let mut bindings = Bindings::new();
    for (param, arg) in signature.params().iter().zip(args) {
        let Some(tag) = &param.cache_param else {
            continue;
        };
        if !tag.alias.is_empty() && !signature.declares(&tag.alias) {
            return Err(CacheError::Binding(format!(
                "unresolvable name override: '{}' matches no parameter",
                tag.alias
            )));
        }
        if let Some(name) = param.key_name() {
            bindings.insert(name, arg.clone());
        }
    }

    if bindings.is_empty() {
        return Err(CacheError::Configuration(
            "no cache key source configured".to_string(),
        ));
    }
    Ok(bindings)
}
