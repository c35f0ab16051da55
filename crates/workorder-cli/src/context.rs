use serde::Serialize;
use std::path::{Path, PathBuf};
use workorder_core::{WorkOrderError, WorkOrderResult};
use workorder_domain::{Document, DocumentSummary, RoomRecord};
use workorder_persistence::DocumentController;

#[derive(Debug, Clone, Serialize)]
pub struct RoomView<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub room: &'a RoomRecord,
    pub complete: bool,
}

impl<'a> RoomView<'a> {
    pub fn new(index: usize, room: &'a RoomRecord) -> Self {
        Self {
            index,
            room,
            complete: room.is_complete(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView<'a> {
    pub work_order: &'a str,
    pub project_name: &'a str,
    pub rooms: Vec<RoomView<'a>>,
    pub summary: DocumentSummary,
}

impl<'a> DocumentView<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            work_order: &document.work_order,
            project_name: &document.project_name,
            rooms: room_views(document),
            summary: document.summary(),
        }
    }
}

pub fn room_views(document: &Document) -> Vec<RoomView<'_>> {
    document
        .rooms()
        .iter()
        .enumerate()
        .map(|(index, room)| RoomView::new(index, room))
        .collect()
}

/// An open work order file: load, mutate through the controller, save back.
pub struct CliContext {
    pub controller: DocumentController,
    path: PathBuf,
}

impl CliContext {
    pub fn load(file_path: &str) -> WorkOrderResult<Self> {
        let path = PathBuf::from(file_path);
        if !path.exists() {
            return Err(WorkOrderError::NotFound(format!(
                "work order file {} (use `create` first)",
                path.display()
            )));
        }

        let mut controller = DocumentController::new();
        controller.load(&path)?;
        Ok(Self { controller, path })
    }

    /// Starts a context for a file that must not exist yet.
    pub fn create(file_path: &str) -> WorkOrderResult<Self> {
        let path = PathBuf::from(file_path);
        if path.exists() {
            return Err(WorkOrderError::Validation(format!(
                "{} already exists",
                path.display()
            )));
        }
        Ok(Self {
            controller: DocumentController::new(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        self.controller.document()
    }

    pub fn save(&self) -> WorkOrderResult<()> {
        self.controller.save(&self.path)
    }

    /// Removes a room unless it is the last one; a file without rooms
    /// cannot be loaded again.
    pub fn remove_room(&mut self, index: usize) -> WorkOrderResult<RoomRecord> {
        if self.document().room_count() == 1 && index == 0 {
            return Err(WorkOrderError::Validation(
                "Cannot remove the only room; a work order file needs at least one room"
                    .to_string(),
            ));
        }
        self.controller.remove_room(index)
    }
}
