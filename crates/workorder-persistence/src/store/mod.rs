pub mod atomic_writer;
pub mod csv_file_store;

pub use atomic_writer::AtomicWriter;
pub use csv_file_store::CsvFileStore;
