//! secs - Rust implementation of the SECS-II item model
//!
//! This library provides the SECS-II data item (SEMI E5) with its exact wire
//! encoding and SML text notation.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `secs-core`: Formats, item headers, the immutable `Item`, SML text, errors
//! - `secs-codec`: Item tree encoder and decoder
//! - `secs-trace`: Tracer interface, `log` tracer and traced writer
//!
//! # Usage
//!
//! ```
//! use secs::{Item, SecsFormat};
//!
//! let item = Item::list([Item::u2([0x0102]), Item::ascii("OK")]);
//! let bytes = secs::codec::encode(&item).unwrap();
//! assert_eq!(&bytes[..4], &[0x01, 0x02, 0xA9, 0x02]);
//!
//! let decoded = secs::codec::decode(&bytes).unwrap();
//! assert_eq!(decoded.items().unwrap()[0].first::<u16>().unwrap(), 0x0102);
//! assert_eq!(Item::empty(SecsFormat::U1).first_or_none::<u8>().unwrap(), None);
//! ```

// Re-export core types
pub use secs_core::*;

// Re-export encoder/decoder API
pub mod codec {
    pub use secs_codec::*;
}

// Re-export tracing API
pub mod trace {
    pub use secs_trace::*;
}
