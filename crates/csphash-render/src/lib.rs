//! CSP header formatting and digest report rendering.

mod csp;
mod report;

pub use csp::{CSP_PREFIX, CspHeaderValue, format_csp};
pub use report::{CspStyle, OutputFormat, ReportWriter};
