use std::io;
use std::path::PathBuf;
use thiserror::Error;

type Offset = u64;

#[derive(Debug, Error)]
pub enum HexDiffError {
    #[error("error opening {} for reading: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("error seeking to {offset:#x} in {}: {source}", .path.display())]
    Seek {
        path: PathBuf,
        offset: Offset,
        source: io::Error,
    },
    #[error("error reading {name}: {source}")]
    Read { name: String, source: io::Error },
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
    #[error("invalid block width {0} (expected 1..=256)")]
    InvalidBlockWidth(usize),
}
