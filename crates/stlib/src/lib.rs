//! stlib output runtime
//!
//! Runtime support linked into programs produced by the compiler front-end.
//! Exposes string, line and integer output on standard output. Each call
//! flushes before it returns, so output is visible to terminals, pipes and
//! redirected files in program order.
//!
//! The C-callable symbols live in [`ffi`]. Rust callers, and tests that need
//! a capturing sink, use [`OutputGateway`] directly.

pub mod config;
pub mod decimal;
pub mod error;
pub mod ffi;
pub mod gateway;
pub mod log;
pub mod sink;

pub use error::{GatewayError, Result, WRITE_FAILED};
pub use gateway::{OutputGateway, ResultCode};
pub use sink::StdoutSink;
