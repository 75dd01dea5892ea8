use crate::hash::HashState;
use csphash_core::{CspHashError, Digest, FileDigest};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default read chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest accepted read chunk size (64 MiB).
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

const READER_LABEL: &str = "<reader>";

/// Streams a file through SHA-256 in fixed-size chunks.
#[derive(Debug, Clone, Copy)]
pub struct DigestComputer {
    chunk_size: usize,
}

impl Default for DigestComputer {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DigestComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read chunk size. Must be in `1..=MAX_CHUNK_SIZE`.
    pub fn chunk_size(mut self, chunk_size: usize) -> Result<Self, CspHashError> {
        if !(1..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(CspHashError::InvalidChunkSize(chunk_size));
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    pub fn current_chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Compute the SHA-256 digest of the file at `path`.
    pub fn digest_file(&self, path: &Path) -> Result<Digest, CspHashError> {
        self.hash_file(path).map(|f| f.digest)
    }

    /// Compute the digest of the file at `path` along with its hashed size.
    pub fn hash_file(&self, path: &Path) -> Result<FileDigest, CspHashError> {
        let label = path.display().to_string();

        let file = File::open(path).map_err(|e| CspHashError::file_unavailable(&label, &e))?;
        let metadata = file
            .metadata()
            .map_err(|e| CspHashError::file_unavailable(&label, &e))?;
        if !metadata.is_file() {
            return Err(CspHashError::FileUnavailable {
                path: label,
                reason: "not a regular file".to_string(),
            });
        }

        tracing::debug!(path = %label, size = metadata.len(), chunk_size = self.chunk_size, "hashing file");

        // `file` is dropped when `stream` returns, on success or error.
        let (digest, size) = self.stream(file, &label)?;

        tracing::debug!(path = %label, bytes = size, digest = %digest, "hashed file");

        Ok(FileDigest {
            path: label,
            size,
            digest,
        })
    }

    /// Compute the digest of everything readable from `reader`.
    pub fn digest_reader<R: Read>(&self, reader: R) -> Result<Digest, CspHashError> {
        self.stream(reader, READER_LABEL).map(|(digest, _)| digest)
    }

    fn stream<R: Read>(&self, mut reader: R, label: &str) -> Result<(Digest, u64), CspHashError> {
        let mut state = HashState::new();
        let mut buf = vec![0u8; self.chunk_size];
        let mut chunks = 0u64;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CspHashError::read_failure(label, &e)),
            };
            state.update(&buf[..n]);
            chunks += 1;
        }

        tracing::trace!(path = label, chunks, "read complete");

        let size = state.bytes_hashed();
        Ok((state.finalize(), size))
    }
}

/// Compute the SHA-256 digest of a file using the default chunk size.
pub fn digest_file(path: &Path) -> Result<Digest, CspHashError> {
    DigestComputer::new().digest_file(path)
}
