//! Background Tasks Module
//!
//! Periodic maintenance for the in-memory store.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
