//! Item payload, one variant per SECS-II format

use crate::format::SecsFormat;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// Payload of an item
///
/// A List carries child items, every other format carries an array (or a
/// string for text formats). The two shapes cannot be mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemValue {
    List(Vec<Item>),
    Binary(#[serde(with = "serde_bytes")] Vec<u8>),
    Boolean(Vec<bool>),
    Ascii(String),
    Jis8(String),
    I1(Vec<i8>),
    I2(Vec<i16>),
    I4(Vec<i32>),
    I8(Vec<i64>),
    U1(Vec<u8>),
    U2(Vec<u16>),
    U4(Vec<u32>),
    U8(Vec<u64>),
    F4(Vec<f32>),
    F8(Vec<f64>),
}

impl ItemValue {
    /// Zero-length payload of the given format
    pub fn empty(format: SecsFormat) -> Self {
        match format {
            SecsFormat::List => ItemValue::List(Vec::new()),
            SecsFormat::Binary => ItemValue::Binary(Vec::new()),
            SecsFormat::Boolean => ItemValue::Boolean(Vec::new()),
            SecsFormat::Ascii => ItemValue::Ascii(String::new()),
            SecsFormat::Jis8 => ItemValue::Jis8(String::new()),
            SecsFormat::I1 => ItemValue::I1(Vec::new()),
            SecsFormat::I2 => ItemValue::I2(Vec::new()),
            SecsFormat::I4 => ItemValue::I4(Vec::new()),
            SecsFormat::I8 => ItemValue::I8(Vec::new()),
            SecsFormat::U1 => ItemValue::U1(Vec::new()),
            SecsFormat::U2 => ItemValue::U2(Vec::new()),
            SecsFormat::U4 => ItemValue::U4(Vec::new()),
            SecsFormat::U8 => ItemValue::U8(Vec::new()),
            SecsFormat::F4 => ItemValue::F4(Vec::new()),
            SecsFormat::F8 => ItemValue::F8(Vec::new()),
        }
    }

    pub fn format(&self) -> SecsFormat {
        match self {
            ItemValue::List(_) => SecsFormat::List,
            ItemValue::Binary(_) => SecsFormat::Binary,
            ItemValue::Boolean(_) => SecsFormat::Boolean,
            ItemValue::Ascii(_) => SecsFormat::Ascii,
            ItemValue::Jis8(_) => SecsFormat::Jis8,
            ItemValue::I1(_) => SecsFormat::I1,
            ItemValue::I2(_) => SecsFormat::I2,
            ItemValue::I4(_) => SecsFormat::I4,
            ItemValue::I8(_) => SecsFormat::I8,
            ItemValue::U1(_) => SecsFormat::U1,
            ItemValue::U2(_) => SecsFormat::U2,
            ItemValue::U4(_) => SecsFormat::U4,
            ItemValue::U8(_) => SecsFormat::U8,
            ItemValue::F4(_) => SecsFormat::F4,
            ItemValue::F8(_) => SecsFormat::F8,
        }
    }

    /// Child count, array length, or character count
    pub fn count(&self) -> usize {
        match self {
            ItemValue::List(v) => v.len(),
            ItemValue::Binary(v) | ItemValue::U1(v) => v.len(),
            ItemValue::Boolean(v) => v.len(),
            ItemValue::Ascii(s) | ItemValue::Jis8(s) => s.chars().count(),
            ItemValue::I1(v) => v.len(),
            ItemValue::I2(v) => v.len(),
            ItemValue::I4(v) => v.len(),
            ItemValue::I8(v) => v.len(),
            ItemValue::U2(v) => v.len(),
            ItemValue::U4(v) => v.len(),
            ItemValue::U8(v) => v.len(),
            ItemValue::F4(v) => v.len(),
            ItemValue::F8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
