//! SECS-II item header encoding
//!
//! An item header is one format byte followed by 1 to 3 big-endian length
//! bytes. The format byte packs the 6-bit format code in its high bits and the
//! number of length bytes ("length-of-length") in its low 2 bits.

use crate::error::{SecsError, SecsResult};
use crate::format::SecsFormat;

/// Largest length representable in 3 length bytes
pub const MAX_LENGTH: usize = 0xFF_FFFF;

/// Decoded item header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHeader {
    pub format: SecsFormat,
    /// Number of length bytes following the format byte (1..=3)
    pub length_bytes: u8,
    /// Payload byte count, or child item count for List
    pub length: usize,
}

impl ItemHeader {
    /// Total header size in bytes
    pub fn size(&self) -> usize {
        1 + self.length_bytes as usize
    }
}

/// Smallest number of length bytes able to hold `length`
///
/// # Errors
///
/// Returns `LengthOverflow` if `length` does not fit in 3 bytes
pub fn length_of_length(length: usize) -> SecsResult<u8> {
    match length {
        0..=0xFF => Ok(1),
        0x100..=0xFFFF => Ok(2),
        0x1_0000..=MAX_LENGTH => Ok(3),
        _ => Err(SecsError::LengthOverflow { length }),
    }
}

/// Encode the header for an item of `format` whose length field is `length`
pub fn encode_header(format: SecsFormat, length: usize) -> SecsResult<Vec<u8>> {
    let length_bytes = length_of_length(length)?;
    let mut buffer = Vec::with_capacity(1 + length_bytes as usize);
    write_header(&mut buffer, format, length_bytes, length);
    Ok(buffer)
}

/// Encode the header and reserve room for the payload behind it
///
/// For List the length is a child count, so only the header is allocated. For
/// every other format the returned buffer has capacity for `length` payload
/// bytes, left for the caller to append.
pub fn encode_with_payload_capacity(format: SecsFormat, length: usize) -> SecsResult<Vec<u8>> {
    let length_bytes = length_of_length(length)?;
    let header_size = 1 + length_bytes as usize;
    let capacity = if format.is_list() {
        header_size
    } else {
        header_size + length
    };
    let mut buffer = Vec::with_capacity(capacity);
    write_header(&mut buffer, format, length_bytes, length);
    Ok(buffer)
}

fn write_header(buffer: &mut Vec<u8>, format: SecsFormat, length_bytes: u8, length: usize) {
    buffer.push(format.header_bits() | length_bytes);
    let be = (length as u32).to_be_bytes();
    buffer.extend_from_slice(&be[4 - length_bytes as usize..]);
}

/// Decode an item header from the start of `bytes`
///
/// # Errors
///
/// Returns an error if the format code is unknown, the length-of-length is 0,
/// or `bytes` is too short to hold the length field.
pub fn decode_header(bytes: &[u8]) -> SecsResult<ItemHeader> {
    let Some(&first) = bytes.first() else {
        return Err(SecsError::InvalidData(
            "Not enough bytes for item header".to_string(),
        ));
    };

    let format = SecsFormat::from_code(first >> 2)?;
    let length_bytes = first & 0x03;
    if length_bytes == 0 {
        return Err(SecsError::InvalidData(format!(
            "Invalid length-of-length 0 in format byte 0x{:02X}",
            first
        )));
    }

    let end = 1 + length_bytes as usize;
    if bytes.len() < end {
        return Err(SecsError::InvalidData(format!(
            "Not enough bytes for length: need {}, have {}",
            length_bytes,
            bytes.len() - 1
        )));
    }

    let length = bytes[1..end]
        .iter()
        .fold(0usize, |len, &byte| (len << 8) | byte as usize);

    Ok(ItemHeader {
        format,
        length_bytes,
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTHS: [usize; 7] = [0, 1, 127, 128, 65535, 65536, 16_777_215];

    #[test]
    fn test_header_round_trip() {
        for format in SecsFormat::ALL {
            for length in LENGTHS {
                let bytes = encode_header(format, length).unwrap();
                let header = decode_header(&bytes).unwrap();
                assert_eq!(header.format, format);
                assert_eq!(header.length, length);
                assert_eq!(header.length_bytes, length_of_length(length).unwrap());
                assert_eq!(bytes.len(), 1 + header.length_bytes as usize);
                assert_eq!(header.size(), bytes.len());
            }
        }
    }

    #[test]
    fn test_minimal_length_of_length() {
        assert_eq!(length_of_length(0).unwrap(), 1);
        assert_eq!(length_of_length(255).unwrap(), 1);
        assert_eq!(length_of_length(256).unwrap(), 2);
        assert_eq!(length_of_length(65535).unwrap(), 2);
        assert_eq!(length_of_length(65536).unwrap(), 3);
        assert_eq!(length_of_length(MAX_LENGTH).unwrap(), 3);
    }

    #[test]
    fn test_header_layout() {
        assert_eq!(encode_header(SecsFormat::List, 0).unwrap(), vec![0x01, 0x00]);
        assert_eq!(encode_header(SecsFormat::U2, 2).unwrap(), vec![0xA9, 0x02]);
        assert_eq!(
            encode_header(SecsFormat::Binary, 0x1234).unwrap(),
            vec![0x22, 0x12, 0x34]
        );
        assert_eq!(
            encode_header(SecsFormat::Ascii, 0x01_0000).unwrap(),
            vec![0x43, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn test_length_overflow() {
        for format in SecsFormat::ALL {
            assert!(matches!(
                encode_header(format, MAX_LENGTH + 1),
                Err(SecsError::LengthOverflow { length: 16_777_216 })
            ));
            assert!(encode_with_payload_capacity(format, usize::MAX).is_err());
        }
    }

    #[test]
    fn test_payload_capacity() {
        let buffer = encode_with_payload_capacity(SecsFormat::U4, 8).unwrap();
        assert_eq!(buffer, vec![0xB1, 0x08]);
        assert!(buffer.capacity() >= 10);
    }

    #[test]
    fn test_decode_rejects_zero_length_of_length() {
        assert!(matches!(
            decode_header(&[0xA4, 0x01]),
            Err(SecsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_decode_truncated() {
        assert!(decode_header(&[]).is_err());
        assert!(decode_header(&[0x23, 0x00]).is_err());
    }
}
