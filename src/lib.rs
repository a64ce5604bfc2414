//! Side-by-side hexadecimal comparison of two byte streams.
//!
//! Both streams are read in fixed-width blocks and each block pair is
//! rendered as one line of address, hex and printable columns, with
//! differing bytes highlighted in red and matching bytes in green. Runs of
//! equal blocks are collapsed to a single line followed by `...`.

mod hex_diff;

// Exported objects
pub use crate::hex_diff::algorithm::{minimize_colors, tag_bytes, LineAction, RunState, Tag};
pub use crate::hex_diff::config::{fit_bytes, parse_number, BlockWidth, Config};
pub use crate::hex_diff::error::HexDiffError;
pub use crate::hex_diff::helper::{read_block, ReadStatus, Side};
pub use crate::hex_diff::hex_diff_line::{
    render_header, HexDiffLine, Pane, ADDRESS_TAG, ANSI_GREEN, ANSI_RED, ANSI_RESET,
};
pub use crate::hex_diff::result::Result;
pub use crate::hex_diff::stream::{open_stream, Stream};
pub use crate::hex_diff::{hex_diff, Summary};

extern crate log;
