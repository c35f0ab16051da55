use crate::store::CsvFileStore;
use crate::traits::DocumentStore;
use std::path::Path;
use workorder_core::{Clock, SystemClock, WorkOrderResult};
use workorder_domain::{
    CompletionChange, CompletionFlag, Document, NoopObserver, RoomField, RoomObserver, RoomRecord,
    RoomRow,
};

/// Owns the open work order and routes every mutation through the domain
/// model with a shared clock and observer.
pub struct DocumentController {
    document: Document,
    clock: Box<dyn Clock>,
    observer: Box<dyn RoomObserver>,
}

impl DocumentController {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            document: Document::default(),
            clock: Box::new(clock),
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl RoomObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn set_work_order(&mut self, work_order: impl Into<String>) {
        self.document.work_order = work_order.into();
    }

    pub fn set_project_name(&mut self, project_name: impl Into<String>) {
        self.document.project_name = project_name.into();
    }

    pub fn add_room(&mut self, initial_row: Option<RoomRow>) -> usize {
        self.document.add_room(initial_row, self.clock.as_ref())
    }

    pub fn push_room(&mut self, room: RoomRecord) -> usize {
        self.document.push_room(room)
    }

    pub fn remove_room(&mut self, index: usize) -> WorkOrderResult<RoomRecord> {
        self.document.remove_room(index)
    }

    pub fn set_room_field(
        &mut self,
        index: usize,
        field: RoomField,
        value: impl Into<String>,
    ) -> WorkOrderResult<()> {
        self.document.set_room_field(index, field, value)
    }

    pub fn toggle_room(
        &mut self,
        index: usize,
        flag: CompletionFlag,
    ) -> WorkOrderResult<CompletionChange> {
        self.document
            .toggle_room(index, flag, self.clock.as_ref(), self.observer.as_mut())
    }

    pub fn set_room_flag(
        &mut self,
        index: usize,
        flag: CompletionFlag,
        value: bool,
    ) -> WorkOrderResult<CompletionChange> {
        self.document.set_room_flag(
            index,
            flag,
            value,
            self.clock.as_ref(),
            self.observer.as_mut(),
        )
    }

    pub fn save(&self, path: impl AsRef<Path>) -> WorkOrderResult<()> {
        CsvFileStore::new(path).save(&self.document)
    }

    /// Replaces the open document with the file's contents.
    ///
    /// The whole file is parsed before anything is replaced; on error the
    /// current document is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> WorkOrderResult<()> {
        let loaded = CsvFileStore::new(path).load(self.clock.as_ref())?;
        self.document = loaded;
        Ok(())
    }
}

impl Default for DocumentController {
    fn default() -> Self {
        Self::new()
    }
}
