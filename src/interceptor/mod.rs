//! Interceptor Module
//!
//! Read-through caching around an arbitrary computation, with tombstones for
//! results known to be absent.

mod engine;
mod operation;

pub use engine::CacheInterceptor;
pub use operation::CachedOperation;
