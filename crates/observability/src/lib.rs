//! Tracing/logging initialization for the client process.

pub mod tracing;

pub use self::tracing::init;
