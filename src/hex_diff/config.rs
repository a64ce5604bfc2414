use crate::hex_diff::error::HexDiffError;
use crate::hex_diff::result::Result;
use std::convert::TryFrom;
use std::fmt;

/// Per-side decoration around the hex and printable columns: the address
/// field plus the gaps that follow it and the hex column.
const SIDE_DECORATION: i64 = 15;

/// Number of bytes compared and rendered per line. Always within
/// `BlockWidth::MIN..=BlockWidth::MAX`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct BlockWidth(usize);

impl BlockWidth {
    pub const MIN: usize = 1;
    pub const MAX: usize = 256;
    pub const DEFAULT: BlockWidth = BlockWidth(16);

    pub fn new(width: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(HexDiffError::InvalidBlockWidth(width))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BlockWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BlockWidth {
    type Error = HexDiffError;

    fn try_from(width: usize) -> Result<Self> {
        Self::new(width)
    }
}

impl fmt::Display for BlockWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved settings for one comparison run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Config {
    pub width: BlockWidth,
    /// Omit the space between adjacent hex pairs.
    pub dense: bool,
    /// Render every block, disabling run suppression.
    pub show_all: bool,
    /// Render nothing for equal blocks.
    pub skip_same: bool,
    /// Total bytes to compare, 0 = until end of stream.
    pub max_len: u64,
    /// Starting offset of the left stream, used for displayed addresses.
    pub left_skip: u64,
    /// Starting offset of the right stream, used for displayed addresses.
    pub right_skip: u64,
}

/// Derives how many bytes fit on one line of a terminal `columns` wide.
pub fn fit_bytes(columns: usize, dense: bool) -> BlockWidth {
    let per_byte: i64 = if dense { 2 } else { 3 };
    let even = i64::try_from(columns & !1).unwrap_or(i64::MAX);
    let fitted = (even - 2 * SIDE_DECORATION) / (2 * per_byte);
    BlockWidth(fitted.clamp(BlockWidth::MIN as i64, BlockWidth::MAX as i64) as usize)
}

/// Parses an unsigned number the way C's `strtoull(s, 0, 0)` picks a base:
/// `0x` prefix for hex, a leading `0` for octal, decimal otherwise.
pub fn parse_number(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(format!("invalid number '{}'", s));
    }
    u64::from_str_radix(digits, radix).map_err(|why| format!("invalid number '{}': {}", s, why))
}
