use std::path::Path;
use workorder_core::{Clock, WorkOrderResult};
use workorder_domain::Document;

/// Storage backend for a single work order document.
pub trait DocumentStore {
    /// Validates and writes the document. Nothing is written when the
    /// document fails validation.
    fn save(&self, document: &Document) -> WorkOrderResult<()>;

    /// Reads a complete document. `clock` stamps rooms that are finished but
    /// were stored without a completion time.
    fn load(&self, clock: &dyn Clock) -> WorkOrderResult<Document>;

    fn exists(&self) -> bool;

    fn path(&self) -> &Path;
}
