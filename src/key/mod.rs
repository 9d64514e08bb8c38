//! Cache Key Module
//!
//! Turns an operation's key pattern and call-time arguments into a store key.

mod params;
mod template;


pub use params::{bind, Arg, Bindings, CacheParam, ParamSpec, Signature};
pub use template::{derive_pattern, placeholders, resolve};
