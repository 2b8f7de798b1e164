//! Parquet manifest writer.
//!
//! Writes manifests in Apache Parquet format for better compression and
//! direct integration with data science tooling.

use arrow::array::{ArrayRef, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::output::types::LabeledImage;
use crate::output::writer::ManifestWriter;

/// Parquet format manifest writer.
///
/// Buffers records and writes them in batches for efficient columnar
/// compression.
pub struct ParquetManifestWriter {
    writer: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
    buffer: Vec<LabeledImage>,
    batch_size: usize,
}

impl ParquetManifestWriter {
    /// Create a new Parquet writer.
    pub fn new(path: &Path) -> Result<Self> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("path", DataType::Utf8, false),
            Field::new("label", DataType::UInt32, false),
        ]));

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .set_writer_version(parquet::file::properties::WriterVersion::PARQUET_2_0)
            .build();

        let file = File::create(path).map_err(|e| Error::ParquetFileCreate {
            path: path.to_path_buf(),
            source: e,
        })?;

        let writer =
            ArrowWriter::try_new(file, schema.clone(), Some(props)).map_err(|e| {
                Error::ParquetWrite {
                    context: "failed to initialize Parquet writer".to_string(),
                    source: e,
                }
            })?;

        Ok(Self {
            writer: Some(writer),
            schema,
            buffer: Vec::new(),
            batch_size: 1000,
        })
    }

    /// Flush buffered records to file.
    fn flush_batch(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let paths: ArrayRef = Arc::new(StringArray::from(
            self.buffer
                .iter()
                .map(|image| image.path.to_string_lossy().into_owned())
                .collect::<Vec<String>>(),
        ));
        let labels: ArrayRef = Arc::new(UInt32Array::from(
            self.buffer.iter().map(|image| image.label).collect::<Vec<u32>>(),
        ));

        let batch = RecordBatch::try_new(self.schema.clone(), vec![paths, labels])
            .map_err(|e| Error::ParquetWrite {
                context: "failed to build record batch".to_string(),
                source: e.into(),
            })?;

        if let Some(writer) = self.writer.as_mut() {
            writer.write(&batch).map_err(|e| Error::ParquetWrite {
                context: "failed to write Parquet record batch".to_string(),
                source: e,
            })?;
        }
        self.buffer.clear();

        Ok(())
    }
}

impl ManifestWriter for ParquetManifestWriter {
    fn write_header(&mut self) -> Result<()> {
        // Parquet embeds its schema in the file format
        Ok(())
    }

    fn write_record(&mut self, image: &LabeledImage) -> Result<()> {
        self.buffer.push(image.clone());
        if self.buffer.len() >= self.batch_size {
            self.flush_batch()?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.flush_batch()?;
        if let Some(writer) = self.writer.take() {
            writer.close().map_err(|e| Error::ParquetWrite {
                context: "failed to close Parquet writer".to_string(),
                source: e,
            })?;
        }
        Ok(())
    }
}
