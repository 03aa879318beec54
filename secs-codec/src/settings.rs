//! Decoder settings

use secs_core::MAX_LENGTH;
use serde::{Deserialize, Serialize};

/// Limits applied while decoding untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderSettings {
    /// Deepest List nesting accepted; the outermost item is depth 0
    pub max_depth: usize,
    /// Largest child count accepted for a single List
    pub max_list_items: usize,
}

impl DecoderSettings {
    /// Create decoder settings
    pub fn new(max_depth: usize, max_list_items: usize) -> Self {
        Self {
            max_depth,
            max_list_items,
        }
    }

    /// Create default settings with a custom nesting limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_list_items: MAX_LENGTH,
        }
    }
}
