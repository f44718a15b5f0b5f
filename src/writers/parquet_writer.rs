use crate::error::{PipelineError, Result};
use crate::models::GalacticCoordinate;
use crate::utils::constants::{
    COMPRESSION_GZIP, COMPRESSION_LZ4, COMPRESSION_NONE, COMPRESSION_SNAPPY, COMPRESSION_ZSTD,
    DEFAULT_ROW_GROUP_SIZE,
};
use crate::writers::TableSink;
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ParquetTableWriter {
    path: PathBuf,
    compression: Compression,
    row_group_size: usize,
}

impl ParquetTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            compression: Compression::SNAPPY,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }

    pub fn with_compression(mut self, compression: &str) -> Result<Self> {
        self.compression = match compression.to_lowercase().as_str() {
            COMPRESSION_SNAPPY => Compression::SNAPPY,
            COMPRESSION_GZIP => Compression::GZIP(GzipLevel::default()),
            COMPRESSION_LZ4 => Compression::LZ4,
            COMPRESSION_ZSTD => Compression::ZSTD(ZstdLevel::default()),
            COMPRESSION_NONE => Compression::UNCOMPRESSED,
            _ => {
                return Err(PipelineError::Config(format!(
                    "Unsupported compression: {}",
                    compression
                )))
            }
        };
        Ok(self)
    }

    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arrow schema; column names follow the output header
    fn create_schema(header: &[&str]) -> Result<Arc<Schema>> {
        let [name, l, b] = header else {
            return Err(PipelineError::InvalidFormat(format!(
                "expected 3 header columns, got {}",
                header.len()
            )));
        };

        Ok(Arc::new(Schema::new(vec![
            Field::new(*name, DataType::Utf8, false),
            Field::new(*l, DataType::Float64, false),
            Field::new(*b, DataType::Float64, false),
        ])))
    }

    fn rows_to_batch(rows: &[GalacticCoordinate], schema: Arc<Schema>) -> Result<RecordBatch> {
        let names: Vec<&str> = rows.iter().map(|r| r.target_name.as_str()).collect();
        let longitudes: Vec<f64> = rows.iter().map(|r| r.l_deg).collect();
        let latitudes: Vec<f64> = rows.iter().map(|r| r.b_deg).collect();

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(names)),
            Arc::new(Float64Array::from(longitudes)),
            Arc::new(Float64Array::from(latitudes)),
        ];

        Ok(RecordBatch::try_new(schema, columns)?)
    }

    /// Read back up to `limit` rows from a galactic Parquet table
    pub fn read_records(path: &Path, limit: usize) -> Result<Vec<GalacticCoordinate>> {
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

        let file = File::open(path)?;
        let parquet_reader = ParquetRecordBatchReaderBuilder::try_new(file)?
            .with_batch_size(limit.clamp(1, 8192))
            .build()?;

        let mut records = Vec::new();

        for batch_result in parquet_reader {
            let batch = batch_result?;

            let names = batch
                .column(0)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| {
                    PipelineError::InvalidFormat("Invalid target name column type".to_string())
                })?;
            let longitudes = batch
                .column(1)
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| {
                    PipelineError::InvalidFormat("Invalid longitude column type".to_string())
                })?;
            let latitudes = batch
                .column(2)
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| {
                    PipelineError::InvalidFormat("Invalid latitude column type".to_string())
                })?;

            for i in 0..batch.num_rows() {
                if records.len() >= limit {
                    return Ok(records);
                }
                records.push(GalacticCoordinate::new(
                    names.value(i).to_string(),
                    longitudes.value(i),
                    latitudes.value(i),
                ));
            }
        }

        Ok(records)
    }

    /// Get file statistics
    pub fn get_file_info(&self) -> Result<ParquetFileInfo> {
        use parquet::file::reader::{FileReader, SerializedFileReader};

        let file = File::open(&self.path)?;
        let reader = SerializedFileReader::new(file)?;
        let metadata = reader.metadata();

        Ok(ParquetFileInfo {
            total_rows: metadata.file_metadata().num_rows(),
            row_groups: metadata.num_row_groups(),
            file_size: std::fs::metadata(&self.path)?.len(),
            compression: self.compression,
        })
    }
}

impl TableSink for ParquetTableWriter {
    fn write_table(&mut self, header: &[&str], rows: &[GalacticCoordinate]) -> Result<()> {
        let schema = Self::create_schema(header)?;

        let file = File::create(&self.path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;
        for chunk in rows.chunks(self.row_group_size.max(1)) {
            writer.write(&Self::rows_to_batch(chunk, schema.clone())?)?;
        }
        writer.close()?;

        Ok(())
    }
}

#[derive(Debug)]
pub struct ParquetFileInfo {
    pub total_rows: i64,
    pub row_groups: usize,
    pub file_size: u64,
    pub compression: Compression,
}

impl ParquetFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Parquet File Summary:\n\
            - Total rows: {}\n\
            - Row groups: {}\n\
            - File size: {} bytes\n\
            - Compression: {:?}",
            self.total_rows, self.row_groups, self.file_size, self.compression,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::OUTPUT_HEADER;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<GalacticCoordinate> {
        vec![
            GalacticCoordinate::new("Vega".to_string(), 67.448, 19.237),
            GalacticCoordinate::new("M31".to_string(), 121.174, -21.573),
        ]
    }

    #[test]
    fn test_write_and_read_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out.parquet");

        let mut writer = ParquetTableWriter::new(&path);
        writer.write_table(&OUTPUT_HEADER, &sample_rows())?;

        assert_eq!(ParquetTableWriter::read_records(&path, 10)?, sample_rows());
        assert_eq!(ParquetTableWriter::read_records(&path, 1)?.len(), 1);

        let info = writer.get_file_info()?;
        assert_eq!(info.total_rows, 2);
        assert!(info.summary().contains("Total rows: 2"));
        Ok(())
    }

    #[test]
    fn test_different_compressions() -> Result<()> {
        let temp_dir = TempDir::new()?;

        for compression in ["snappy", "gzip", "lz4", "zstd", "none", "ZSTD"] {
            let path = temp_dir.path().join(format!("{}.parquet", compression));
            let result = ParquetTableWriter::new(&path)
                .with_compression(compression)?
                .write_table(&OUTPUT_HEADER, &sample_rows());
            assert!(result.is_ok(), "Failed with compression: {}", compression);
        }

        Ok(())
    }

    #[test]
    fn test_unknown_compression() {
        assert!(ParquetTableWriter::new("x.parquet")
            .with_compression("brotli-ish")
            .is_err());
    }

    #[test]
    fn test_small_row_groups() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("groups.parquet");

        let mut writer = ParquetTableWriter::new(&path).with_row_group_size(1);
        writer.write_table(&OUTPUT_HEADER, &sample_rows())?;

        assert_eq!(writer.get_file_info()?.row_groups, 2);
        Ok(())
    }
}
