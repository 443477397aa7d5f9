//! Text payload
//!
//! Whitespace-aware text: the string plus a flag recording whether leading
//! whitespace preceded it in the source.

use compact_str::CompactString;

// =============================================================================
// TextValue
// =============================================================================

/// Text node payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextValue {
    /// Whether leading whitespace precedes the string
    pub whitespace: bool,
    /// Text content
    pub string: CompactString,
}

impl TextValue {
    /// Create a new text payload
    pub fn new(whitespace: bool, string: impl Into<CompactString>) -> Self {
        Self {
            whitespace,
            string: string.into(),
        }
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// Get text length in bytes
    pub fn len(&self) -> usize {
        self.string.len()
    }

    /// Check if text content is only whitespace
    pub fn is_blank(&self) -> bool {
        self.string.trim().is_empty()
    }
}
