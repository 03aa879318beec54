//! Single-byte character encodings for ASCII (A) and JIS8 (J) items

/// Byte written for characters the encoding cannot represent
pub const REPLACEMENT: u8 = b'?';

/// Character encoder/decoder used by text items
pub trait TextEncoding: Send + Sync {
    /// Encode `text` to bytes, one byte per character
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Decode bytes to a string
    fn decode(&self, bytes: &[u8]) -> String;
}

/// 7-bit US-ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl TextEncoding for Ascii {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| if c.is_ascii() { c as u8 } else { REPLACEMENT })
            .collect()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { REPLACEMENT as char })
            .collect()
    }
}

/// JIS X 0201 8-bit encoding (Roman set plus half-width katakana)
#[derive(Debug, Clone, Copy, Default)]
pub struct Jis8;

const YEN_SIGN: char = '\u{00A5}';
const OVERLINE: char = '\u{203E}';
const KATAKANA_FIRST: u32 = 0xFF61;
const KATAKANA_LAST: u32 = 0xFF9F;

impl Jis8 {
    fn encode_char(c: char) -> u8 {
        match c {
            YEN_SIGN => 0x5C,
            OVERLINE => 0x7E,
            '\\' | '~' => REPLACEMENT,
            c if c.is_ascii() => c as u8,
            c if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&(c as u32)) => {
                (c as u32 - KATAKANA_FIRST + 0xA1) as u8
            }
            _ => REPLACEMENT,
        }
    }

    fn decode_byte(b: u8) -> char {
        match b {
            0x5C => YEN_SIGN,
            0x7E => OVERLINE,
            0x00..=0x7F => b as char,
            0xA1..=0xDF => char::from_u32(KATAKANA_FIRST + (b - 0xA1) as u32)
                .unwrap_or(REPLACEMENT as char),
            _ => REPLACEMENT as char,
        }
    }
}

impl TextEncoding for Jis8 {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(Self::encode_char).collect()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| Self::decode_byte(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(Ascii.encode("AB c"), b"AB c".to_vec());
        assert_eq!(Ascii.encode("é"), vec![REPLACEMENT]);
        assert_eq!(Ascii.decode(b"hello"), "hello");
    }

    #[test]
    fn test_jis8_katakana() {
        // ｱ (U+FF71) is 0xB1 in JIS X 0201
        assert_eq!(Jis8.encode("ｱｲ"), vec![0xB1, 0xB2]);
        assert_eq!(Jis8.decode(&[0xB1, 0xB2]), "ｱｲ");
    }

    #[test]
    fn test_jis8_roman_set() {
        assert_eq!(Jis8.encode("¥‾A"), vec![0x5C, 0x7E, 0x41]);
        assert_eq!(Jis8.decode(&[0x5C, 0x7E]), "¥‾");
        assert_eq!(Jis8.encode("漢"), vec![REPLACEMENT]);
    }
}
