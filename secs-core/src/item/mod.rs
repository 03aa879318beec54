//! SECS-II data item
//!
//! An [`Item`] is an immutable tree node: either a List of child items or an
//! array/text payload of one of the scalar formats. Its wire bytes and its SML
//! value text are computed on first access and cached for its lifetime.

pub mod element;
pub mod raw_data;
pub mod value;

use crate::encoding::{Ascii, Jis8, TextEncoding};
use crate::error::{SecsError, SecsResult};
use crate::format::SecsFormat;
use crate::header;
use crate::memo::Memo;
use crate::sml;
use element::WireElement;
use once_cell::sync::Lazy;
use raw_data::RawData;
use serde::{Deserialize, Serialize};
use std::fmt;
use value::ItemValue;

/// Shared zero-length item per format, in [`SecsFormat::ALL`] order
static EMPTY_ITEMS: Lazy<[Item; 15]> = Lazy::new(|| SecsFormat::ALL.map(Item::new_empty));

/// Immutable SECS-II data item
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "ItemValue", into = "ItemValue")]
pub struct Item {
    value: ItemValue,
    raw: Memo<RawData>,
    sml: Memo<String>,
}

impl Item {
    fn new_empty(format: SecsFormat) -> Self {
        Self {
            value: ItemValue::empty(format),
            raw: Memo::with_value(RawData::new(vec![format.header_bits() | 1, 0])),
            sml: Memo::with_value(String::new()),
        }
    }

    /// Shared zero-length item of `format`
    pub fn canonical_empty(format: SecsFormat) -> &'static Item {
        &EMPTY_ITEMS[format.ordinal()]
    }

    /// Zero-length item of `format`
    pub fn empty(format: SecsFormat) -> Self {
        Self::canonical_empty(format).clone()
    }

    /// Constructs a List (L) item
    pub fn list(items: impl IntoIterator<Item = Item>) -> Self {
        ItemValue::List(items.into_iter().collect()).into()
    }

    /// Constructs a Binary (B) item
    pub fn binary(values: impl Into<Vec<u8>>) -> Self {
        ItemValue::Binary(values.into()).into()
    }

    /// Constructs a Boolean item
    pub fn boolean(values: impl Into<Vec<bool>>) -> Self {
        ItemValue::Boolean(values.into()).into()
    }

    /// Constructs an ASCII (A) item
    pub fn ascii(text: impl Into<String>) -> Self {
        ItemValue::Ascii(text.into()).into()
    }

    /// Constructs a JIS8 (J) item
    pub fn jis8(text: impl Into<String>) -> Self {
        ItemValue::Jis8(text.into()).into()
    }

    pub fn i1(values: impl Into<Vec<i8>>) -> Self {
        ItemValue::I1(values.into()).into()
    }

    pub fn i2(values: impl Into<Vec<i16>>) -> Self {
        ItemValue::I2(values.into()).into()
    }

    pub fn i4(values: impl Into<Vec<i32>>) -> Self {
        ItemValue::I4(values.into()).into()
    }

    pub fn i8(values: impl Into<Vec<i64>>) -> Self {
        ItemValue::I8(values.into()).into()
    }

    pub fn u1(values: impl Into<Vec<u8>>) -> Self {
        ItemValue::U1(values.into()).into()
    }

    pub fn u2(values: impl Into<Vec<u16>>) -> Self {
        ItemValue::U2(values.into()).into()
    }

    pub fn u4(values: impl Into<Vec<u32>>) -> Self {
        ItemValue::U4(values.into()).into()
    }

    pub fn u8(values: impl Into<Vec<u64>>) -> Self {
        ItemValue::U8(values.into()).into()
    }

    pub fn f4(values: impl Into<Vec<f32>>) -> Self {
        ItemValue::F4(values.into()).into()
    }

    pub fn f8(values: impl Into<Vec<f64>>) -> Self {
        ItemValue::F8(values.into()).into()
    }

    pub fn format(&self) -> SecsFormat {
        self.value.format()
    }

    /// Number of child items, array elements, or characters
    pub fn count(&self) -> usize {
        self.value.count()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.value, ItemValue::List(_))
    }

    pub fn value(&self) -> &ItemValue {
        &self.value
    }

    pub fn into_value(self) -> ItemValue {
        self.value
    }

    /// Child items of a List
    ///
    /// # Errors
    ///
    /// Returns `NotAList` for any other format
    pub fn items(&self) -> SecsResult<&[Item]> {
        match &self.value {
            ItemValue::List(items) => Ok(items.as_slice()),
            _ => Err(SecsError::NotAList),
        }
    }

    /// Wire bytes of this item, computed once
    ///
    /// # Errors
    ///
    /// Returns `LengthOverflow` if the payload (or child count) does not fit
    /// the 3-byte length field. The error is not cached.
    pub fn raw_data(&self) -> SecsResult<&RawData> {
        self.raw.get_or_try_init(|| self.encode_raw())
    }

    /// SML value text of this item, computed once
    ///
    /// Empty for List; use [`Item::to_sml`] to render the whole tree.
    pub fn text_form(&self) -> &str {
        self.sml.get_or_init(|| sml::value_text(&self.value))
    }

    fn encode_raw(&self) -> SecsResult<RawData> {
        let format = self.format();
        let bytes = match &self.value {
            ItemValue::List(items) => header::encode_header(format, items.len())?,
            ItemValue::Ascii(s) => encode_text(format, &Ascii.encode(s))?,
            ItemValue::Jis8(s) => encode_text(format, &Jis8.encode(s))?,
            ItemValue::Binary(v) | ItemValue::U1(v) => encode_array(format, v)?,
            ItemValue::Boolean(v) => encode_array(format, v)?,
            ItemValue::I1(v) => encode_array(format, v)?,
            ItemValue::I2(v) => encode_array(format, v)?,
            ItemValue::I4(v) => encode_array(format, v)?,
            ItemValue::I8(v) => encode_array(format, v)?,
            ItemValue::U2(v) => encode_array(format, v)?,
            ItemValue::U4(v) => encode_array(format, v)?,
            ItemValue::U8(v) => encode_array(format, v)?,
            ItemValue::F4(v) => encode_array(format, v)?,
            ItemValue::F8(v) => encode_array(format, v)?,
        };
        log::trace!("Encoded {} [{}] into {} bytes", format, self.count(), bytes.len());
        Ok(RawData::new(bytes))
    }
}

fn encode_text(format: SecsFormat, text: &[u8]) -> SecsResult<Vec<u8>> {
    let mut buffer = header::encode_with_payload_capacity(format, text.len())?;
    buffer.extend_from_slice(text);
    Ok(buffer)
}

fn encode_array<T: WireElement>(format: SecsFormat, values: &[T]) -> SecsResult<Vec<u8>> {
    let mut buffer = header::encode_with_payload_capacity(format, values.len() * T::WIDTH)?;
    for &value in values {
        value.write_be(&mut buffer);
    }
    Ok(buffer)
}

impl From<ItemValue> for Item {
    fn from(value: ItemValue) -> Self {
        if value.is_empty() {
            return Self::empty(value.format());
        }
        Self {
            value,
            raw: Memo::new(),
            sml: Memo::new(),
        }
    }
}

impl From<Item> for ItemValue {
    fn from(item: Item) -> Self {
        item.value
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("format", &self.format())
            .field("count", &self.count())
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text_form())
    }
}
