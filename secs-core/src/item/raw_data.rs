//! Encoded bytes of a single item

use std::fmt;
use std::ops::Deref;

/// Wire bytes of one item
///
/// For List this is the header only; children encode themselves. For every
/// other format it is the header followed by the payload in wire byte order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawData {
    bytes: Vec<u8>,
}

impl RawData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get a copy of the bytes
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl Deref for RawData {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl AsRef<[u8]> for RawData {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for RawData {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawData[")?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        write!(f, "]")
    }
}
