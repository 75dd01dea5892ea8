use csphash_core::Digest;
use sha2::{Digest as _, Sha256};

/// Incremental SHA-256 state.
///
/// `finalize` takes `self`, so a state cannot be updated or finalized again
/// once a digest has been produced.
#[derive(Clone, Default)]
pub struct HashState {
    hasher: Sha256,
    absorbed: u64,
}

impl std::fmt::Debug for HashState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashState")
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}

impl HashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes into the state.
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.absorbed += chunk.len() as u64;
    }

    /// Total number of bytes fed in so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.absorbed
    }

    pub fn finalize(self) -> Digest {
        let bytes: [u8; 32] = self.hasher.finalize().into();
        Digest::from_bytes(bytes)
    }
}

/// Compute SHA-256 of an in-memory byte slice.
pub fn digest_bytes(data: &[u8]) -> Digest {
    let mut state = HashState::new();
    state.update(data);
    state.finalize()
}
