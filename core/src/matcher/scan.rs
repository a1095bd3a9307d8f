//! Character location strategies used by the fuzzy matcher
//!
//! Both scanners answer the same question: where is the next occurrence of a
//! (case-folded) character at or after a position. The block scanner hands
//! the work to `memchr`, which compares whole SIMD registers at a time.

/// Text must be longer than this many characters before the block scan is used
pub const ACCELERATION_MIN_TEXT_LEN: usize = 64;

/// Query must be longer than this many characters before the block scan is used
pub const ACCELERATION_MIN_QUERY_LEN: usize = 2;

/// Which scanning strategy the matcher may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Pick the block scan for long inputs, scalar otherwise
    #[default]
    Auto,

    /// Always scan character by character
    Scalar,

    /// Use the block scan whenever the text allows it, regardless of length
    Accelerated,
}

impl ScanMode {
    /// Whether the block scan should be attempted for these input sizes
    pub fn wants_block_scan(self, text_len: usize, query_len: usize) -> bool {
        match self {
            ScanMode::Auto => {
                text_len > ACCELERATION_MIN_TEXT_LEN && query_len > ACCELERATION_MIN_QUERY_LEN
            }
            ScanMode::Scalar => false,
            ScanMode::Accelerated => true,
        }
    }
}

/// Finds the next occurrence of a folded character in folded text
pub(crate) enum Scanner<'a> {
    /// Walks the folded characters one at a time
    Scalar { folded: &'a [char] },

    /// Searches the folded text as bytes; only valid when every folded
    /// character is ASCII, so byte offsets equal character offsets
    Block { bytes: Vec<u8> },
}

impl<'a> Scanner<'a> {
    /// Build the scanner for `folded`, falling back to scalar when the block
    /// scan is not wanted or the text is not pure ASCII.
    pub(crate) fn new(folded: &'a [char], mode: ScanMode, query_len: usize) -> Self {
        if mode.wants_block_scan(folded.len(), query_len) && folded.iter().all(char::is_ascii) {
            let bytes = folded.iter().map(|&c| c as u8).collect();
            Scanner::Block { bytes }
        } else {
            Scanner::Scalar { folded }
        }
    }

    /// Index of the first `needle` at or after `from`, if any
    pub(crate) fn find(&self, needle: char, from: usize) -> Option<usize> {
        match self {
            Scanner::Scalar { folded } => folded
                .get(from..)?
                .iter()
                .position(|&c| c == needle)
                .map(|offset| from + offset),
            Scanner::Block { bytes } => {
                // ASCII text cannot contain a non-ASCII character
                if !needle.is_ascii() {
                    return None;
                }
                memchr::memchr(needle as u8, bytes.get(from..)?).map(|offset| from + offset)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_block(&self) -> bool {
        matches!(self, Scanner::Block { .. })
    }
}
