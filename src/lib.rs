//! Read Through - declarative read-through caching
//!
//! Wraps computations with a cache entry whose key is resolved from a
//! templated pattern and the call's arguments. Results are served from the
//! store when present; misses that fail or produce nothing are remembered as
//! tombstones so repeated lookups for absent data stay off the backend.
//!
//! A small user-lookup service built on the interceptor is served by the
//! `read_through` binary.

pub mod api;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod key;
pub mod models;
pub mod policy;
pub mod repository;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
pub use interceptor::{CacheInterceptor, CachedOperation};
pub use key::{Arg, ParamSpec, Signature};
pub use policy::{CachePolicy, Namespace, TimeUnit};
pub use store::CacheStore;
pub use tasks::spawn_cleanup_task;
