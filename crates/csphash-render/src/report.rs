use crate::csp::CspHeaderValue;
use csphash_core::FileDigest;
use serde::Serialize;
use std::io::Write;

/// Output encoding for a digest report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How the CSP line is rendered, when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CspStyle {
    /// Bare header value.
    Header,
    /// HTML `<meta http-equiv>` tag.
    Meta,
}

/// Writes the result of hashing one file.
pub struct ReportWriter {
    format: OutputFormat,
    csp: Option<CspStyle>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    file: &'a FileDigest,
    #[serde(skip_serializing_if = "Option::is_none")]
    csp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta_tag: Option<String>,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, csp: None }
    }

    pub fn csp(mut self, style: Option<CspStyle>) -> Self {
        self.csp = style;
        self
    }

    /// Render the report as a string.
    pub fn render(&self, file: &FileDigest) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, file)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write the report to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, file: &FileDigest) -> anyhow::Result<()> {
        let csp = self
            .csp
            .map(|style| (style, CspHeaderValue::from_digest(&file.digest)));

        match self.format {
            OutputFormat::Text => {
                writeln!(writer, "SHA-256 Hash: {}", file.digest)?;
                match &csp {
                    Some((CspStyle::Header, value)) => writeln!(writer, "Generated CSP: {value}")?,
                    Some((CspStyle::Meta, value)) => writeln!(writer, "{}", value.to_meta_tag())?,
                    None => {}
                }
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    file,
                    csp: csp.as_ref().map(|(_, value)| value.to_string()),
                    meta_tag: match &csp {
                        Some((CspStyle::Meta, value)) => Some(value.to_meta_tag()),
                        _ => None,
                    },
                };
                serde_json::to_writer(&mut *writer, &report)?;
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}
