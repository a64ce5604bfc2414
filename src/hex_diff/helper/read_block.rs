use std::io::{self, ErrorKind, Read};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReadStatus {
    /// Both buffers were filled.
    Full,
    /// At least one side hit end of stream; its unread tail is zero.
    Partial,
}

impl ReadStatus {
    pub fn end_reached(self) -> bool {
        self == ReadStatus::Partial
    }
}

// Reads until `buf` is full or the source is exhausted. Returns the byte count.
fn fill<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref why) if why.kind() == ErrorKind::Interrupted => continue,
            Err(why) => return Err(why),
        }
    }
    Ok(filled)
}

/// Pulls one block from each side into `left_buf` and `right_buf`, zeroing
/// them first so a short read leaves a zero tail.
pub fn read_block<L: Read + ?Sized, R: Read + ?Sized>(
    left: &mut L,
    right: &mut R,
    left_buf: &mut [u8],
    right_buf: &mut [u8],
) -> Result<ReadStatus, (Side, io::Error)> {
    debug_assert_eq!(left_buf.len(), right_buf.len());
    left_buf.fill(0);
    right_buf.fill(0);

    let left_read = fill(left, left_buf).map_err(|why| (Side::Left, why))?;
    let right_read = fill(right, right_buf).map_err(|why| (Side::Right, why))?;
    log::trace!("read_block(): left = {}, right = {}", left_read, right_read);

    if left_read == left_buf.len() && right_read == right_buf.len() {
        Ok(ReadStatus::Full)
    } else {
        Ok(ReadStatus::Partial)
    }
}
