use crate::codec;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::DocumentStore;
use std::path::{Path, PathBuf};
use workorder_core::{Clock, WorkOrderResult};
use workorder_domain::Document;

/// CSV file-based document store
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentStore for CsvFileStore {
    fn save(&self, document: &Document) -> WorkOrderResult<()> {
        document.validate_for_save()?;

        let bytes = codec::encode(document)?;
        AtomicWriter::write_atomic(&self.path, &bytes)?;

        tracing::info!(
            "Saved work order {} ({} rooms) to {}",
            document.work_order,
            document.room_count(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self, clock: &dyn Clock) -> WorkOrderResult<Document> {
        let bytes = AtomicWriter::read_all(&self.path)?;
        let document = codec::decode(&bytes, clock)?;

        tracing::info!(
            "Loaded work order {} ({} rooms) from {}",
            document.work_order,
            document.room_count(),
            self.path.display()
        );
        Ok(document)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
