use std::fmt;

/// How a leaf term is written.
///
/// A query may use only one kind throughout: free-text search terms and
/// structured field assertions cannot be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    /// Bare word or quoted phrase
    ///
    /// # Examples
    /// ```text
    /// kernel
    /// "out of memory"
    /// ```
    Bare,

    /// `KEY=` followed by a quoted value
    ///
    /// # Examples
    /// ```text
    /// STATUS="open"
    /// ```
    KeyValue,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Bare => "bare",
            BlockType::KeyValue => "key_value",
        }
    }

    /// Human-readable description used in error messages
    pub fn describe(self) -> &'static str {
        match self {
            BlockType::Bare => "bare terms",
            BlockType::KeyValue => "key=value pairs",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
