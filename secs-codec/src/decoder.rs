//! SECS-II item tree decoder

use crate::error::{SecsError, SecsResult};
use crate::settings::DecoderSettings;
use secs_core::header::{self, ItemHeader};
use secs_core::{Ascii, Item, ItemValue, Jis8, SecsFormat, TextEncoding, WireElement};

/// Decoder reading item trees from a byte buffer
///
/// ASCII payloads are decoded as 7-bit text: bytes at or above 0x80 become
/// `?`, so re-encoding a decoded item does not always reproduce the input.
pub struct ItemDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    settings: DecoderSettings,
}

impl<'a> ItemDecoder<'a> {
    /// Create a new decoder with default settings
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_settings(buffer, DecoderSettings::default())
    }

    /// Create a new decoder with custom settings
    pub fn with_settings(buffer: &'a [u8], settings: DecoderSettings) -> Self {
        Self {
            buffer,
            position: 0,
            settings,
        }
    }

    /// Decode one item and all of its children
    pub fn decode_item(&mut self) -> SecsResult<Item> {
        self.decode_at_depth(0)
    }

    /// Decode items until the buffer is exhausted
    pub fn decode_all(&mut self) -> SecsResult<Vec<Item>> {
        let mut items = Vec::new();
        while self.remaining() > 0 {
            items.push(self.decode_item()?);
        }
        Ok(items)
    }

    /// Decode an item header
    pub fn decode_header(&mut self) -> SecsResult<ItemHeader> {
        let header = header::decode_header(&self.buffer[self.position..])?;
        self.position += header.size();
        Ok(header)
    }

    fn decode_at_depth(&mut self, depth: usize) -> SecsResult<Item> {
        let header = self.decode_header()?;
        log::trace!(
            "Decoding {} with length {} at depth {}",
            header.format,
            header.length,
            depth
        );

        match header.format {
            SecsFormat::List => self.decode_list(header.length, depth),
            format => {
                let payload = self.decode_fixed_bytes(header.length)?;
                Ok(Item::from(decode_payload(format, payload)?))
            }
        }
    }

    fn decode_list(&mut self, len: usize, depth: usize) -> SecsResult<Item> {
        if depth > self.settings.max_depth {
            return Err(SecsError::InvalidData(format!(
                "List nesting exceeds maximum depth {}",
                self.settings.max_depth
            )));
        }
        if len > self.settings.max_list_items {
            return Err(SecsError::InvalidData(format!(
                "List of {} items exceeds limit {}",
                len, self.settings.max_list_items
            )));
        }

        // Each child needs at least a 2-byte header
        let mut items = Vec::with_capacity(len.min(self.remaining() / 2));
        for _ in 0..len {
            items.push(self.decode_at_depth(depth + 1)?);
        }
        Ok(Item::list(items))
    }

    /// Decode fixed-length bytes
    pub fn decode_fixed_bytes(&mut self, len: usize) -> SecsResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(SecsError::InvalidData(format!(
                "Not enough bytes: need {}, have {}",
                len,
                self.remaining()
            )));
        }

        let buffer: &'a [u8] = self.buffer;
        let result = &buffer[self.position..self.position + len];
        self.position += len;
        Ok(result)
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }
}

fn decode_payload(format: SecsFormat, payload: &[u8]) -> SecsResult<ItemValue> {
    let value = match format {
        SecsFormat::List => {
            return Err(SecsError::InvalidData(
                "List items carry no payload".to_string(),
            ))
        }
        SecsFormat::Ascii => ItemValue::Ascii(Ascii.decode(payload)),
        SecsFormat::Jis8 => ItemValue::Jis8(Jis8.decode(payload)),
        SecsFormat::Binary => ItemValue::Binary(payload.to_vec()),
        SecsFormat::U1 => ItemValue::U1(payload.to_vec()),
        SecsFormat::Boolean => ItemValue::Boolean(read_array(format, payload)?),
        SecsFormat::I1 => ItemValue::I1(read_array(format, payload)?),
        SecsFormat::I2 => ItemValue::I2(read_array(format, payload)?),
        SecsFormat::I4 => ItemValue::I4(read_array(format, payload)?),
        SecsFormat::I8 => ItemValue::I8(read_array(format, payload)?),
        SecsFormat::U2 => ItemValue::U2(read_array(format, payload)?),
        SecsFormat::U4 => ItemValue::U4(read_array(format, payload)?),
        SecsFormat::U8 => ItemValue::U8(read_array(format, payload)?),
        SecsFormat::F4 => ItemValue::F4(read_array(format, payload)?),
        SecsFormat::F8 => ItemValue::F8(read_array(format, payload)?),
    };
    Ok(value)
}

fn read_array<T: WireElement>(format: SecsFormat, payload: &[u8]) -> SecsResult<Vec<T>> {
    if payload.len() % T::WIDTH != 0 {
        return Err(SecsError::InvalidData(format!(
            "{} payload of {} bytes is not a multiple of {}",
            format,
            payload.len(),
            T::WIDTH
        )));
    }
    Ok(payload.chunks_exact(T::WIDTH).map(T::read_be).collect())
}

/// Decode exactly one item tree from `bytes`
///
/// # Errors
///
/// Returns an error if the bytes are malformed or if bytes remain after the
/// item.
pub fn decode(bytes: &[u8]) -> SecsResult<Item> {
    let mut decoder = ItemDecoder::new(bytes);
    let item = decoder.decode_item()?;
    if decoder.remaining() > 0 {
        return Err(SecsError::InvalidData(format!(
            "{} trailing bytes after item",
            decoder.remaining()
        )));
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_decode_scalar() {
        let item = decode(&[0xA9, 0x04, 0x01, 0x02, 0x03, 0x04]).unwrap();
        assert_eq!(item.format(), SecsFormat::U2);
        assert_eq!(item.values::<u16>().unwrap(), vec![0x0102, 0x0304]);
    }

    #[test]
    fn test_round_trip_tree() {
        let item = Item::list([
            Item::ascii("EQUIPMENT"),
            Item::list([
                Item::u4([1, 0xFFFF_FFFF]),
                Item::i8([-1, i64::MAX]),
                Item::f8([3.25]),
                Item::f4([-0.5]),
            ]),
            Item::boolean([true, false]),
            Item::binary([0x00, 0xFF]),
            Item::jis8("ｱｲ"),
            Item::i1([-128]),
            Item::i2([-300]),
            Item::i4([70000]),
            Item::u1([200]),
            Item::u2([65535]),
            Item::u8([u64::MAX]),
            Item::empty(SecsFormat::List),
            Item::empty(SecsFormat::F4),
        ]);
        let bytes = encode(&item).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, item);
        assert_eq!(decoded.to_sml(), item.to_sml());
    }

    #[test]
    fn test_long_length_field() {
        let item = Item::u1(vec![7u8; 300]);
        let bytes = encode(&item).unwrap();
        assert_eq!(&bytes[..3], &[0xA6, 0x01, 0x2C]);
        assert_eq!(decode(&bytes).unwrap(), item);
    }

    #[test]
    fn test_rejects_zero_length_of_length() {
        assert!(matches!(
            decode(&[0x40]),
            Err(SecsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_format() {
        // 0o22 (C2) << 2 | 1
        assert!(matches!(
            decode(&[0x49, 0x00]),
            Err(SecsError::UnknownFormat(0o22))
        ));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        assert!(decode(&[0x41, 0x03, b'a']).is_err());
        // List announces two children but carries one
        assert!(decode(&[0x01, 0x02, 0xA5, 0x01, 0x01]).is_err());
    }

    #[test]
    fn test_rejects_misaligned_payload() {
        assert!(matches!(
            decode(&[0xB1, 0x03, 0x00, 0x00, 0x01]),
            Err(SecsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        assert!(decode(&[0xA5, 0x01, 0x01, 0x00]).is_err());
    }

    #[test]
    fn test_depth_limit() {
        // Innermost List sits at depth 2
        let nested = Item::list([Item::list([Item::list([Item::u1([1])])])]);
        let bytes = encode(&nested).unwrap();

        let mut shallow = ItemDecoder::with_settings(&bytes, DecoderSettings::with_max_depth(1));
        assert!(matches!(
            shallow.decode_item(),
            Err(SecsError::InvalidData(_))
        ));

        let mut exact = ItemDecoder::with_settings(&bytes, DecoderSettings::with_max_depth(2));
        assert_eq!(exact.decode_item().unwrap(), nested);
    }

    #[test]
    fn test_depth_limit_zero_allows_top_level_list() {
        let flat = encode(&Item::list([Item::u1([1])])).unwrap();
        let mut decoder = ItemDecoder::with_settings(&flat, DecoderSettings::with_max_depth(0));
        assert_eq!(decoder.decode_item().unwrap(), Item::list([Item::u1([1])]));

        let nested = encode(&Item::list([Item::list([Item::u1([1])])])).unwrap();
        let mut decoder = ItemDecoder::with_settings(&nested, DecoderSettings::with_max_depth(0));
        assert!(decoder.decode_item().is_err());
    }

    #[test]
    fn test_ascii_high_bytes_are_replaced() {
        let item = decode(&[0x41, 0x01, 0xB0]).unwrap();
        assert_eq!(item.text().unwrap(), "?");
        assert_eq!(&encode(&item).unwrap()[..], &[0x41, 0x01, b'?']);
    }

    #[test]
    fn test_list_item_limit() {
        let bytes = encode(&Item::list([Item::u1([1]), Item::u1([2])])).unwrap();
        let mut decoder = ItemDecoder::with_settings(&bytes, DecoderSettings::new(8, 1));
        assert!(decoder.decode_item().is_err());
    }

    #[test]
    fn test_decode_all() {
        let bytes = [0xA5, 0x01, 0x05, 0x25, 0x01, 0x00, 0x01, 0x00];
        let mut decoder = ItemDecoder::new(&bytes);
        let items = decoder.decode_all().unwrap();
        assert_eq!(
            items,
            vec![
                Item::u1([5]),
                Item::boolean([false]),
                Item::empty(SecsFormat::List),
            ]
        );
        assert_eq!(decoder.position(), bytes.len());
        assert_eq!(decoder.remaining(), 0);
    }

    #[test]
    fn test_decode_header() {
        let mut decoder = ItemDecoder::new(&[0x42, 0x01, 0x00]);
        let header = decoder.decode_header().unwrap();
        assert_eq!(header.format, SecsFormat::Ascii);
        assert_eq!(header.length_bytes, 2);
        assert_eq!(header.length, 256);
        assert_eq!(decoder.position(), 3);
    }
}
