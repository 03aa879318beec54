//! SECS-II item tree encoding/decoding
//!
//! [`ItemEncoder`] serializes an item tree by writing each List header
//! followed by its children, recursively. [`ItemDecoder`] reads item trees
//! back following the SEMI E5 header rules.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod settings;

pub use decoder::{decode, ItemDecoder};
pub use encoder::{encode, ItemEncoder};
pub use error::{SecsError, SecsResult};
pub use settings::DecoderSettings;
