use crate::hex_diff::algorithm::{minimize_colors, tag_bytes, Tag};
use crate::hex_diff::helper::printable;
use std::fmt;

pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Tag whose color each side of a diff line starts in, before the address.
///
/// `minimize_colors` is told about it so it can drop the directive in front
/// of the first hex pair; changing the address color stays correct as long
/// as this constant follows it.
pub const ADDRESS_TAG: Tag = Tag::Mismatch;

const SIDE_GAP: &str = "    ";

fn directive(tag: Tag) -> &'static str {
    match tag {
        Tag::Match => ANSI_GREEN,
        Tag::Mismatch => ANSI_RED,
    }
}

/// One side of a rendered line: the block and the address it starts at.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pane<'a> {
    pub offset: u64,
    pub bytes: &'a [u8],
}

impl<'a> Pane<'a> {
    pub fn new(offset: u64, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        dense: bool,
        colors: &[Option<Tag>],
    ) -> fmt::Result {
        let color = |i: usize| colors.get(i).copied().flatten().map(directive);

        write!(f, "{:#012x}  ", self.offset)?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 && !dense {
                f.write_str(" ")?;
            }
            if let Some(code) = color(i) {
                f.write_str(code)?;
            }
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(" ")?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if let Some(code) = color(i) {
                f.write_str(code)?;
            }
            write!(f, "{}", printable(*byte))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HexDiffLine<'a> {
    Same {
        left: Pane<'a>,
        right: Pane<'a>,
        dense: bool,
    },
    Diff {
        left: Pane<'a>,
        right: Pane<'a>,
        dense: bool,
        colors: Vec<Option<Tag>>,
    },
    /// Stands in for the rest of a run of equal blocks.
    Ellipsis,
}

impl<'a> HexDiffLine<'a> {
    pub fn same(left: Pane<'a>, right: Pane<'a>, dense: bool) -> Self {
        Self::Same { left, right, dense }
    }

    pub fn diff(left: Pane<'a>, right: Pane<'a>, dense: bool) -> Self {
        let colors = minimize_colors(&tag_bytes(left.bytes, right.bytes), ADDRESS_TAG);
        Self::Diff {
            left,
            right,
            dense,
            colors,
        }
    }
}

impl<'a> fmt::Display for HexDiffLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Same { left, right, dense } => {
                f.write_str(ANSI_RESET)?;
                left.write(f, *dense, &[])?;
                f.write_str(SIDE_GAP)?;
                right.write(f, *dense, &[])
            }
            Self::Diff {
                left,
                right,
                dense,
                colors,
            } => {
                f.write_str(directive(ADDRESS_TAG))?;
                left.write(f, *dense, colors)?;
                f.write_str(SIDE_GAP)?;
                f.write_str(directive(ADDRESS_TAG))?;
                right.write(f, *dense, colors)?;
                f.write_str(ANSI_RESET)
            }
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Column header matching the layout of lines `width` bytes wide.
pub fn render_header(width: usize, dense: bool) -> String {
    let mut side = format!("{:>12}  ", "offset");
    for i in 0..width {
        if i > 0 && !dense {
            side.push(' ');
        }
        side.push_str(&format!("{:>2x}", i & 0xff));
    }
    side.push(' ');
    for i in 0..width {
        side.push_str(&format!("{:x}", i % 16));
    }
    format!("{}{}{}{}", ANSI_RESET, side, SIDE_GAP, side)
}
