//! SECS-II format codes

use crate::error::{SecsError, SecsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SECS-II item format, valued by its 6-bit format code (SEMI E5, octal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SecsFormat {
    List = 0o00,
    Binary = 0o10,
    Boolean = 0o11,
    Ascii = 0o20,
    Jis8 = 0o21,
    I8 = 0o30,
    I1 = 0o31,
    I2 = 0o32,
    I4 = 0o34,
    F8 = 0o40,
    F4 = 0o44,
    U8 = 0o50,
    U1 = 0o51,
    U2 = 0o52,
    U4 = 0o54,
}

impl SecsFormat {
    /// Every format, in format code order
    pub const ALL: [SecsFormat; 15] = [
        SecsFormat::List,
        SecsFormat::Binary,
        SecsFormat::Boolean,
        SecsFormat::Ascii,
        SecsFormat::Jis8,
        SecsFormat::I8,
        SecsFormat::I1,
        SecsFormat::I2,
        SecsFormat::I4,
        SecsFormat::F8,
        SecsFormat::F4,
        SecsFormat::U8,
        SecsFormat::U1,
        SecsFormat::U2,
        SecsFormat::U4,
    ];

    /// Get format from its 6-bit format code
    pub fn from_code(code: u8) -> SecsResult<Self> {
        match code {
            0o00 => Ok(SecsFormat::List),
            0o10 => Ok(SecsFormat::Binary),
            0o11 => Ok(SecsFormat::Boolean),
            0o20 => Ok(SecsFormat::Ascii),
            0o21 => Ok(SecsFormat::Jis8),
            0o30 => Ok(SecsFormat::I8),
            0o31 => Ok(SecsFormat::I1),
            0o32 => Ok(SecsFormat::I2),
            0o34 => Ok(SecsFormat::I4),
            0o40 => Ok(SecsFormat::F8),
            0o44 => Ok(SecsFormat::F4),
            0o50 => Ok(SecsFormat::U8),
            0o51 => Ok(SecsFormat::U1),
            0o52 => Ok(SecsFormat::U2),
            0o54 => Ok(SecsFormat::U4),
            _ => Err(SecsError::UnknownFormat(code)),
        }
    }

    /// Position of this format in [`SecsFormat::ALL`]
    pub(crate) fn ordinal(self) -> usize {
        match self {
            SecsFormat::List => 0,
            SecsFormat::Binary => 1,
            SecsFormat::Boolean => 2,
            SecsFormat::Ascii => 3,
            SecsFormat::Jis8 => 4,
            SecsFormat::I8 => 5,
            SecsFormat::I1 => 6,
            SecsFormat::I2 => 7,
            SecsFormat::I4 => 8,
            SecsFormat::F8 => 9,
            SecsFormat::F4 => 10,
            SecsFormat::U8 => 11,
            SecsFormat::U1 => 12,
            SecsFormat::U2 => 13,
            SecsFormat::U4 => 14,
        }
    }

    /// The 6-bit format code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The format code shifted into the high bits of the header byte
    pub fn header_bits(self) -> u8 {
        self.code() << 2
    }

    /// Width in bytes of one payload element, `None` for List
    pub fn element_width(self) -> Option<usize> {
        match self {
            SecsFormat::List => None,
            SecsFormat::Binary
            | SecsFormat::Boolean
            | SecsFormat::Ascii
            | SecsFormat::Jis8
            | SecsFormat::I1
            | SecsFormat::U1 => Some(1),
            SecsFormat::I2 | SecsFormat::U2 => Some(2),
            SecsFormat::I4 | SecsFormat::U4 | SecsFormat::F4 => Some(4),
            SecsFormat::I8 | SecsFormat::U8 | SecsFormat::F8 => Some(8),
        }
    }

    pub fn is_list(self) -> bool {
        self == SecsFormat::List
    }

    pub fn is_text(self) -> bool {
        matches!(self, SecsFormat::Ascii | SecsFormat::Jis8)
    }

    /// Item tag used in SML notation
    pub fn sml_name(self) -> &'static str {
        match self {
            SecsFormat::List => "L",
            SecsFormat::Binary => "B",
            SecsFormat::Boolean => "Boolean",
            SecsFormat::Ascii => "A",
            SecsFormat::Jis8 => "J",
            SecsFormat::I8 => "I8",
            SecsFormat::I1 => "I1",
            SecsFormat::I2 => "I2",
            SecsFormat::I4 => "I4",
            SecsFormat::F8 => "F8",
            SecsFormat::F4 => "F4",
            SecsFormat::U8 => "U8",
            SecsFormat::U1 => "U1",
            SecsFormat::U2 => "U2",
            SecsFormat::U4 => "U4",
        }
    }
}

impl fmt::Display for SecsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sml_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_round_trip() {
        for format in SecsFormat::ALL {
            assert_eq!(SecsFormat::from_code(format.code()).unwrap(), format);
        }
    }

    #[test]
    fn test_ordinal_matches_all() {
        for (i, format) in SecsFormat::ALL.iter().enumerate() {
            assert_eq!(format.ordinal(), i);
        }
    }

    #[test]
    fn test_header_bits() {
        assert_eq!(SecsFormat::List.header_bits(), 0x00);
        assert_eq!(SecsFormat::Binary.header_bits(), 0x20);
        assert_eq!(SecsFormat::Ascii.header_bits(), 0x40);
        assert_eq!(SecsFormat::F4.header_bits(), 0x90);
        assert_eq!(SecsFormat::U4.header_bits(), 0xB0);
    }

    #[test]
    fn test_unknown_code() {
        // C2 (two-byte character) is not supported
        assert!(matches!(
            SecsFormat::from_code(0o22),
            Err(SecsError::UnknownFormat(0o22))
        ));
        assert!(SecsFormat::from_code(0o77).is_err());
    }

    #[test]
    fn test_element_width() {
        assert_eq!(SecsFormat::List.element_width(), None);
        assert_eq!(SecsFormat::Boolean.element_width(), Some(1));
        assert_eq!(SecsFormat::I2.element_width(), Some(2));
        assert_eq!(SecsFormat::F4.element_width(), Some(4));
        assert_eq!(SecsFormat::U8.element_width(), Some(8));
    }

    #[test]
    fn test_is_text() {
        let text: Vec<_> = SecsFormat::ALL.into_iter().filter(|f| f.is_text()).collect();
        assert_eq!(text, vec![SecsFormat::Ascii, SecsFormat::Jis8]);
    }
}
