pub mod codec;
pub mod controller;
pub mod store;
pub mod traits;

pub use codec::{decode, encode, CSV_HEADER};
pub use controller::DocumentController;
pub use store::{AtomicWriter, CsvFileStore};
pub use traits::DocumentStore;
