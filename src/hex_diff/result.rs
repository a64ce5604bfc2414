use crate::hex_diff::error::HexDiffError;

pub type Result<T> = std::result::Result<T, HexDiffError>;
