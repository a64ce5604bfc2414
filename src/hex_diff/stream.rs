use crate::hex_diff::error::HexDiffError;
use crate::hex_diff::result::Result;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A byte source together with the name used to report its failures.
#[derive(Debug)]
pub struct Stream<R> {
    name: String,
    inner: R,
}

impl<R: Read> Stream<R> {
    pub fn new<S: Into<String>>(name: S, inner: R) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn reader(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Opens `path` and positions it at `offset`.
pub fn open_stream(path: &Path, offset: u64) -> Result<Stream<BufReader<File>>> {
    let file = File::open(path).map_err(|source| HexDiffError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    reader
        .seek(SeekFrom::Start(offset))
        .map_err(|source| HexDiffError::Seek {
            path: path.to_path_buf(),
            offset,
            source,
        })?;
    log::debug!("opened {} at offset {:#x}", path.display(), offset);
    Ok(Stream::new(path.display().to_string(), reader))
}

#[cfg(test)]
mod tests {
    use crate::hex_diff::error::HexDiffError;
    use crate::hex_diff::stream::open_stream;
    use std::io::Read;

    #[test]
    fn test_open_stream_seeks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        let stream = open_stream(&path, 4);
        assert!(stream.is_ok());
        if let Ok(stream) = stream {
            assert_eq!(stream.name(), path.display().to_string());
            let mut rest = vec![];
            stream.into_inner().read_to_end(&mut rest).unwrap();
            assert_eq!(rest, b"456789");
        }
    }

    #[test]
    fn test_open_stream_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");
        match open_stream(&path, 0) {
            Err(why @ HexDiffError::Open { .. }) => {
                assert!(why.to_string().contains("missing.bin"), "{}", why)
            }
            other => assert!(false, "{:?}", other),
        }
    }
}
