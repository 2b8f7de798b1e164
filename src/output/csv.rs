//! CSV manifest writer.

use crate::error::{Error, Result};
use crate::output::types::LabeledImage;
use crate::output::writer::ManifestWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV format manifest writer.
pub struct CsvManifestWriter {
    writer: BufWriter<File>,
}

impl CsvManifestWriter {
    /// Create a new CSV writer.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::ManifestWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl ManifestWriter for CsvManifestWriter {
    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "path,label")?;
        Ok(())
    }

    fn write_record(&mut self, image: &LabeledImage) -> Result<()> {
        writeln!(
            self.writer,
            "{},{}",
            escape_csv(&image.path.display().to_string()),
            image.label
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
