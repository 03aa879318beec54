//! SECS-II item tree encoder

use crate::error::SecsResult;
use bytes::{Bytes, BytesMut};
use secs_core::{Item, ItemValue};

/// Encoder writing whole item trees in wire order
///
/// Each List contributes its header followed by the full encoding of each
/// child in order.
pub struct ItemEncoder {
    buffer: BytesMut,
}

impl ItemEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Encode an item and all of its children
    pub fn encode_item(&mut self, item: &Item) -> SecsResult<()> {
        let raw = item.raw_data()?;
        log::trace!("Encoding {} [{}], {} bytes", item.format(), item.count(), raw.len());
        self.buffer.extend_from_slice(raw);

        if let ItemValue::List(items) = item.value() {
            for child in items {
                self.encode_item(child)?;
            }
        }
        Ok(())
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for ItemEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one item tree
pub fn encode(item: &Item) -> SecsResult<Bytes> {
    let mut encoder = ItemEncoder::new();
    encoder.encode_item(item)?;
    Ok(encoder.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secs_core::{SecsError, SecsFormat};

    #[test]
    fn test_encode_scalar() {
        let bytes = encode(&Item::u2([0x0102])).unwrap();
        assert_eq!(&bytes[..], &[0xA9, 0x02, 0x01, 0x02]);
    }

    #[test]
    fn test_encode_nested_list() {
        let item = Item::list([
            Item::u1([1]),
            Item::list([Item::ascii("A")]),
            Item::empty(SecsFormat::List),
        ]);
        let bytes = encode(&item).unwrap();
        assert_eq!(
            &bytes[..],
            &[
                0x01, 0x03, // L [3]
                0xA5, 0x01, 0x01, // U1 1
                0x01, 0x01, // L [1]
                0x41, 0x01, b'A', // A "A"
                0x01, 0x00, // L [0]
            ]
        );
    }

    #[test]
    fn test_encoder_accumulates() {
        let mut encoder = ItemEncoder::with_capacity(16);
        assert!(encoder.is_empty());
        encoder.encode_item(&Item::boolean([true])).unwrap();
        encoder.encode_item(&Item::empty(SecsFormat::Binary)).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x25, 0x01, 0x01, 0x21, 0x00]);
        assert_eq!(encoder.len(), 5);
        encoder.clear();
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_child_overflow_propagates() {
        let item = Item::list([Item::binary(vec![0u8; secs_core::MAX_LENGTH + 1])]);
        assert!(matches!(
            encode(&item),
            Err(SecsError::LengthOverflow { .. })
        ));
    }
}
