//! Array element types and typed value extraction

use crate::error::{SecsError, SecsResult};
use crate::item::value::ItemValue;
use crate::item::Item;
use std::mem::size_of;

mod sealed {
    pub trait Sealed {}
}

/// Array element with a fixed-width big-endian wire representation
pub trait WireElement: Copy + sealed::Sealed {
    /// Width of one element on the wire
    const WIDTH: usize;

    /// Append the element in wire byte order
    fn write_be(self, buffer: &mut Vec<u8>);

    /// Read one element from exactly `WIDTH` bytes in wire byte order
    fn read_be(bytes: &[u8]) -> Self;
}

macro_rules! impl_wire_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl WireElement for $ty {
                const WIDTH: usize = size_of::<$ty>();

                fn write_be(self, buffer: &mut Vec<u8>) {
                    buffer.extend_from_slice(&self.to_be_bytes());
                }

                fn read_be(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_be_bytes(raw)
                }
            }
        )*
    };
}

impl_wire_number!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl sealed::Sealed for bool {}

impl WireElement for bool {
    const WIDTH: usize = 1;

    fn write_be(self, buffer: &mut Vec<u8>) {
        buffer.push(self as u8);
    }

    fn read_be(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

/// Element type that can be extracted from an item payload
pub trait ItemElement: WireElement {
    /// Rust type name reported on a mismatch
    const TYPE_NAME: &'static str;

    /// Borrow the payload array if its element type is `Self`
    fn slice_of(value: &ItemValue) -> Option<&[Self]>;
}

macro_rules! impl_item_element {
    ($ty:ty => $($variant:ident)|+) => {
        impl ItemElement for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn slice_of(value: &ItemValue) -> Option<&[Self]> {
                match value {
                    $(ItemValue::$variant(v))|+ => Some(v.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_item_element!(u8 => Binary | U1);
impl_item_element!(i8 => I1);
impl_item_element!(u16 => U2);
impl_item_element!(i16 => I2);
impl_item_element!(u32 => U4);
impl_item_element!(i32 => I4);
impl_item_element!(u64 => U8);
impl_item_element!(i64 => I8);
impl_item_element!(f32 => F4);
impl_item_element!(f64 => F8);
impl_item_element!(bool => Boolean);

impl Item {
    /// Borrow the payload array
    ///
    /// # Errors
    ///
    /// `NotAScalar` on a List, `TypeMismatch` if the element type differs from
    /// the payload's
    pub fn as_slice<T: ItemElement>(&self) -> SecsResult<&[T]> {
        match self.value() {
            ItemValue::List(_) => Err(SecsError::NotAScalar),
            value => T::slice_of(value).ok_or(SecsError::TypeMismatch {
                requested: T::TYPE_NAME,
                format: self.format(),
            }),
        }
    }

    /// Copy of the whole payload array
    pub fn values<T: ItemElement>(&self) -> SecsResult<Vec<T>> {
        Ok(self.as_slice::<T>()?.to_vec())
    }

    /// First element of the payload array
    ///
    /// # Errors
    ///
    /// Same as [`Item::as_slice`], plus `EmptyValue` when the array is empty.
    /// Use [`Item::first_or_none`] when an empty item is acceptable.
    pub fn first<T: ItemElement>(&self) -> SecsResult<T> {
        self.first_or_none()?.ok_or(SecsError::EmptyValue {
            format: self.format(),
        })
    }

    /// First element of the payload array, `None` when it is empty
    pub fn first_or_none<T: ItemElement>(&self) -> SecsResult<Option<T>> {
        Ok(self.as_slice::<T>()?.first().copied())
    }

    /// Borrow the string of an ASCII or JIS8 item
    pub fn as_text(&self) -> SecsResult<&str> {
        match self.value() {
            ItemValue::List(_) => Err(SecsError::NotAScalar),
            ItemValue::Ascii(s) | ItemValue::Jis8(s) => Ok(s.as_str()),
            _ => Err(SecsError::TypeMismatch {
                requested: "String",
                format: self.format(),
            }),
        }
    }

    /// Copy of the string of an ASCII or JIS8 item
    pub fn text(&self) -> SecsResult<String> {
        self.as_text().map(str::to_owned)
    }
}
