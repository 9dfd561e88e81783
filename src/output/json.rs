// src/output/json.rs

use super::ResultFormatter;
use crate::parsed::ParsedUrl;
use std::io::{self, Write};

/// One JSON object per record, one record per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn write_record(
        &self,
        parsed: &ParsedUrl,
        _first: bool,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        serde_json::to_writer(&mut *writer, parsed)?;
        writeln!(writer)
    }
}
