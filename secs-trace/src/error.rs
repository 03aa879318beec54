//! Error types shared with `secs-core`

pub use secs_core::error::{SecsError, SecsResult};
