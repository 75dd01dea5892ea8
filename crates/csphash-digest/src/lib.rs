//! Streaming SHA-256 digests of local files.

mod computer;
mod hash;

pub use computer::{DEFAULT_CHUNK_SIZE, DigestComputer, MAX_CHUNK_SIZE, digest_file};
pub use hash::{HashState, digest_bytes};
