//! csphash core domain types and errors.

mod error;
mod types;

pub use error::CspHashError;
pub use types::{DIGEST_HEX_LEN, DIGEST_LEN, Digest, FileDigest, is_digest_hex};

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_HEX: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    // --- Digest hex ---

    #[test]
    fn digest_to_hex_is_lowercase_64_chars() {
        let digest = Digest::from_bytes([0xAB; 32]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), DIGEST_HEX_LEN);
        assert_eq!(hex, "ab".repeat(32));
    }

    #[test]
    fn digest_display_matches_to_hex() {
        let digest = Digest::from_bytes([0x0f; 32]);
        assert_eq!(format!("{digest}"), digest.to_hex());
        assert!(digest.to_string().starts_with("0f0f"));
    }

    #[test]
    fn digest_from_hex_parses_known_value() {
        let digest = Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(digest.as_bytes()[0], 0xe3);
        assert_eq!(digest.as_bytes()[31], 0x55);
        assert_eq!(digest.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn digest_from_hex_accepts_uppercase() {
        let upper = EMPTY_HEX.to_ascii_uppercase();
        let digest: Digest = upper.parse().unwrap();
        assert_eq!(digest.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn digest_from_hex_rejects_short_input() {
        let err = Digest::from_hex("abc").unwrap_err();
        assert!(matches!(err, CspHashError::MalformedDigest(ref s) if s == "abc"));
    }

    #[test]
    fn digest_from_hex_rejects_non_hex() {
        let bad = format!("{}zz", &EMPTY_HEX[..62]);
        assert!(matches!(
            Digest::from_hex(&bad),
            Err(CspHashError::MalformedDigest(_))
        ));
    }

    #[test]
    fn digest_from_hex_rejects_multibyte_input_of_hex_length() {
        let bad = "é".repeat(32);
        assert_eq!(bad.len(), DIGEST_HEX_LEN);
        assert!(matches!(
            Digest::from_hex(&bad),
            Err(CspHashError::MalformedDigest(s)) if s == bad
        ));
        assert!(!is_digest_hex(&bad));
    }

    #[test]
    fn digest_from_hex_mixed_case() {
        let mixed = "E3b0C44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852B855";
        assert_eq!(Digest::from_hex(mixed).unwrap().to_hex(), EMPTY_HEX);
    }

    #[test]
    fn digest_from_array() {
        let digest: Digest = [1u8; 32].into();
        assert_eq!(digest.as_bytes(), &[1u8; 32]);
    }

    #[test]
    fn digest_serializes_as_hex_string() {
        let digest = Digest::from_hex(EMPTY_HEX).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{EMPTY_HEX}\""));
    }

    // --- FileDigest ---

    #[test]
    fn file_digest_serializes_pascal_case() {
        let file = FileDigest {
            path: "index.html".to_string(),
            size: 0,
            digest: Digest::from_hex(EMPTY_HEX).unwrap(),
        };
        let value: serde_json::Value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["Path"], "index.html");
        assert_eq!(value["Size"], 0);
        assert_eq!(value["Sha256"], EMPTY_HEX);
    }

    // --- is_digest_hex ---

    #[test]
    fn digest_hex_check() {
        assert!(is_digest_hex(EMPTY_HEX));
        assert!(!is_digest_hex(""));
        assert!(!is_digest_hex(&EMPTY_HEX[..63]));
        assert!(!is_digest_hex(&format!("{EMPTY_HEX}0")));
        assert!(!is_digest_hex(&format!("{} ", &EMPTY_HEX[..63])));
    }

    // --- CspHashError ---

    #[test]
    fn error_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = CspHashError::file_unavailable("index.html", &io_err);
        let msg = err.to_string();
        assert!(msg.contains("index.html"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn read_failure_is_distinct_from_file_unavailable() {
        let io_err = std::io::Error::other("disk fault");
        let err = CspHashError::read_failure("index.html", &io_err);
        assert!(matches!(err, CspHashError::ReadFailure { .. }));
        assert!(err.to_string().starts_with("read failure"));
    }

    #[test]
    fn invalid_chunk_size_display() {
        let err = CspHashError::InvalidChunkSize(0);
        assert!(err.to_string().contains("between 1 and 67108864"));
    }
}
