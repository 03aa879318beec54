//! Core types for the SECS-II item model
//!
//! This crate provides the SECS-II format codes, the item header encoding,
//! the immutable [`Item`] value with its cached wire bytes and SML text, and
//! the error type shared by the other crates.

pub mod encoding;
pub mod error;
pub mod format;
pub mod header;
pub mod item;
pub mod memo;
pub mod sml;

pub use encoding::{Ascii, Jis8, TextEncoding};
pub use error::{SecsError, SecsResult};
pub use format::SecsFormat;
pub use header::{ItemHeader, MAX_LENGTH};
pub use item::element::{ItemElement, WireElement};
pub use item::raw_data::RawData;
pub use item::value::ItemValue;
pub use item::Item;
pub use memo::Memo;
pub use sml::SmlSettings;
