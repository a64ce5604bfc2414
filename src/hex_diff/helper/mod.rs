mod printable;
mod read_block;

pub(crate) use printable::printable;
pub use read_block::{read_block, ReadStatus, Side};
