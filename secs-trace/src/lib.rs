//! Trace collaborators for SECS-II items
//!
//! This crate provides the [`SecsTracer`] interface used to report items
//! crossing a connection, a [`LogTracer`] backed by the `log` facade, and a
//! [`TraceWriter`] that writes encoded items to any `io::Write` sink.

pub mod error;
pub mod tracer;
pub mod writer;

pub use error::{SecsError, SecsResult};
pub use tracer::{incoming_line, outgoing_line, LogTracer, SecsTracer};
pub use writer::TraceWriter;
