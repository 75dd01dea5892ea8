//! Benchmark harness: measures file hashing throughput at several chunk sizes.
//!
//! Run with: cargo bench -p csphash-cli
//!
//! This uses a plain timing loop rather than an external bench framework.

use std::fs;
use std::time::Instant;

use csphash_digest::DigestComputer;

fn create_fixture(bytes: usize) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    let data: Vec<u8> = (0..bytes).map(|i| (i % 251) as u8).collect();
    fs::write(&path, data).unwrap();
    (dir, path)
}

fn main() {
    let sizes = [64 * 1024, 4 * 1024 * 1024];
    let chunk_sizes = [64, 1024, 8192, 65536];

    for &size in &sizes {
        let (_dir, path) = create_fixture(size);
        println!("\n=== {} KiB file ===", size / 1024);

        for &chunk in &chunk_sizes {
            let computer = DigestComputer::new().chunk_size(chunk).unwrap();
            let iterations = 10;

            let start = Instant::now();
            for _ in 0..iterations {
                computer.digest_file(&path).unwrap();
            }
            let elapsed = start.elapsed() / iterations;

            let mib_per_sec = size as f64 / 1_048_576.0 / elapsed.as_secs_f64();
            println!("  chunk {chunk:>6}: {elapsed:>10.2?}  ({mib_per_sec:.1} MiB/s)");
        }
    }
}
