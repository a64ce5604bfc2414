use crate::hex_diff::algorithm::{LineAction, RunState};
use crate::hex_diff::config::Config;
use crate::hex_diff::error::HexDiffError;
use crate::hex_diff::helper::{read_block, ReadStatus, Side};
use crate::hex_diff::hex_diff_line::{HexDiffLine, Pane};
use crate::hex_diff::stream::Stream;
use result::Result;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod algorithm;
pub mod config;
pub mod error;
pub mod helper;
pub mod hex_diff_line;
pub mod result;
pub mod stream;

/// Counters for a finished comparison run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Summary {
    /// Blocks read and compared.
    pub blocks: u64,
    /// Blocks that differed in at least one byte.
    pub differing_blocks: u64,
    /// Bytes consumed from each side, counted in whole blocks.
    pub bytes: u64,
    /// The run stopped because `cancel` was set.
    pub cancelled: bool,
}

/// Compares `left` and `right` block by block, writing one rendered line
/// per block (or run of equal blocks) to `out`.
///
/// Stops at the end of either stream, once `config.max_len` bytes have been
/// compared, or when `cancel` is observed at the start of an iteration.
pub fn hex_diff<L: Read, R: Read, W: Write>(
    left: &mut Stream<L>,
    right: &mut Stream<R>,
    out: &mut W,
    config: &Config,
    cancel: &AtomicBool,
) -> Result<Summary> {
    let width = config.width.get();
    log::debug!(
        "hex_diff(): {} vs {}, width = {}, max_len = {}",
        left.name(),
        right.name(),
        width,
        config.max_len
    );

    let mut left_buf = vec![0u8; width];
    let mut right_buf = vec![0u8; width];
    let mut state = RunState::new();
    let mut summary = Summary::default();
    let mut cnt = 0u64;

    while config.max_len == 0 || cnt < config.max_len {
        if cancel.load(Ordering::Relaxed) {
            log::debug!("hex_diff(): cancelled at {:#x}", cnt);
            summary.cancelled = true;
            break;
        }

        let read = read_block(
            left.reader(),
            right.reader(),
            &mut left_buf,
            &mut right_buf,
        );
        let status = match read {
            Ok(status) => status,
            Err((side, source)) => {
                let name = match side {
                    Side::Left => left.name(),
                    Side::Right => right.name(),
                };
                return Err(HexDiffError::Read {
                    name: name.to_string(),
                    source,
                });
            }
        };

        let equal = left_buf == right_buf;
        let action = state.observe(equal, config);
        log::trace!("hex_diff(): cnt = {:#x}, equal = {}, action = {:?}", cnt, equal, action);

        let left_pane = Pane::new(config.left_skip.wrapping_add(cnt), &left_buf);
        let right_pane = Pane::new(config.right_skip.wrapping_add(cnt), &right_buf);
        let line = match action {
            LineAction::Same => Some(HexDiffLine::same(left_pane, right_pane, config.dense)),
            LineAction::Diff => Some(HexDiffLine::diff(left_pane, right_pane, config.dense)),
            LineAction::Ellipsis => Some(HexDiffLine::Ellipsis),
            LineAction::Suppress => None,
        };
        if let Some(line) = line {
            writeln!(out, "{}", line).map_err(HexDiffError::Write)?;
        }

        summary.blocks += 1;
        if !equal {
            summary.differing_blocks += 1;
        }
        cnt = cnt.saturating_add(width as u64);
        summary.bytes = cnt;

        if status == ReadStatus::Partial {
            log::debug!("hex_diff(): end of stream at {:#x}", cnt);
            break;
        }
    }

    Ok(summary)
}
