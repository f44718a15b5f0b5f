pub mod table_reader;

pub use table_reader::{CsvTableReader, MemoryTable, TableSource};
