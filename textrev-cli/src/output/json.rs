//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textrev_core::Reversal;

/// JSON formatter - outputs reversals as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reversals: Vec<Reversal>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reversals: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_reversal(&mut self, reversal: &Reversal) -> Result<()> {
        self.reversals.push(reversal.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reversals)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reversals)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textrev_core::{Method, Reverser};

    #[test]
    fn test_compact_json() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            let reversal = Reverser::new().reverse(Method::TwoPointers, "abc");
            formatter.format_reversal(&reversal).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "[{\"method\":\"two-pointers\",\"input\":\"abc\",\"output\":\"cba\"}]\n"
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            for reversal in Reverser::new().reverse_all("hi there") {
                formatter.format_reversal(&reversal).unwrap();
            }
            formatter.finish().unwrap();
        }

        let parsed: Vec<Reversal> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[5].method, Method::Words);
        assert_eq!(parsed[5].output, "ih ereht");
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, false).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
