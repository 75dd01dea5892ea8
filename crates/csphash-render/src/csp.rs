use csphash_core::{CspHashError, Digest, is_digest_hex};
use std::fmt;

/// Policy text preceding the hash source expression.
pub const CSP_PREFIX: &str = "default-src 'self'; script-src 'self' ";

/// A Content-Security-Policy header value allowing one inline script by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspHeaderValue(String);

impl CspHeaderValue {
    pub fn from_digest(digest: &Digest) -> Self {
        Self(build(&digest.to_hex()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as an HTML `<meta http-equiv>` tag.
    pub fn to_meta_tag(&self) -> String {
        format!(
            "<meta http-equiv=\"Content-Security-Policy\" content=\"{}\">",
            self.0
        )
    }
}

impl fmt::Display for CspHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CspHeaderValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Format a hex digest into a CSP header value.
///
/// The input must be exactly 64 hex characters; uppercase is lowercased so the
/// emitted source expression is canonical.
pub fn format_csp(hex: &str) -> Result<CspHeaderValue, CspHashError> {
    if !is_digest_hex(hex) {
        return Err(CspHashError::MalformedDigest(hex.to_string()));
    }
    Ok(CspHeaderValue(build(&hex.to_ascii_lowercase())))
}

fn build(hex: &str) -> String {
    format!("{CSP_PREFIX}'sha256-{hex}'")
}
