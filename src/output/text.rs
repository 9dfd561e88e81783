// src/output/text.rs

use super::ResultFormatter;
use crate::parsed::ParsedUrl;
use std::io::{self, Write};

/// Human-readable `field: value` listing.
///
/// # Examples
/// ```
/// use giturlparse::output::{ResultFormatter, TextFormatter};
///
/// let parsed = giturlparse::parse("git+https://github.com/Org/Repo.git");
/// let mut buffer = Vec::new();
/// TextFormatter.write_record(&parsed, true, &mut buffer).unwrap();
/// let text = String::from_utf8(buffer).unwrap();
///
/// assert!(text.contains("platform: github\n"));
/// assert!(text.contains("protocols: git, https\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ResultFormatter for TextFormatter {
    fn write_record(
        &self,
        parsed: &ParsedUrl,
        first: bool,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        if !first {
            writeln!(writer)?;
        }
        let fields: [(&str, String); 17] = [
            ("url", parsed.url().to_string()),
            ("valid", parsed.valid().to_string()),
            ("platform", parsed.platform().to_string()),
            ("protocol", parsed.protocol().to_string()),
            ("protocols", parsed.protocols().join(", ")),
            ("user", parsed.user().to_string()),
            ("host", parsed.host().to_string()),
            ("resource", parsed.resource().to_string()),
            ("port", parsed.port().to_string()),
            ("pathname", parsed.pathname().to_string()),
            ("owner", parsed.owner().to_string()),
            ("groups", parsed.groups().join(", ")),
            ("repo", parsed.repo().to_string()),
            ("name", parsed.name().to_string()),
            ("branch", parsed.branch().to_string()),
            ("path", parsed.path().to_string()),
            ("path_raw", parsed.path_raw().to_string()),
        ];
        for (key, value) in fields {
            if value.is_empty() {
                writeln!(writer, "{}:", key)?;
            } else {
                writeln!(writer, "{}: {}", key, value)?;
            }
        }
        Ok(())
    }
}
