use crate::observer::RoomObserver;
use crate::room::{CompletionChange, CompletionFlag, RoomField, RoomRecord, RoomRow};
use crate::summary::DocumentSummary;
use serde::Serialize;
use workorder_core::{Clock, WorkOrderError, WorkOrderResult};

/// A work order: its number, project name and ordered rooms.
///
/// Room order is display order and save order. Room names are not unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub work_order: String,
    pub project_name: String,
    rooms: Vec<RoomRecord>,
}

impl Document {
    pub fn new(work_order: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            work_order: work_order.into(),
            project_name: project_name.into(),
            rooms: Vec::new(),
        }
    }

    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> WorkOrderResult<&RoomRecord> {
        self.rooms.get(index).ok_or_else(|| room_not_found(index))
    }

    fn room_mut(&mut self, index: usize) -> WorkOrderResult<&mut RoomRecord> {
        self.rooms.get_mut(index).ok_or_else(|| room_not_found(index))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Appends a blank room, or one rebuilt from `initial_row`.
    /// Returns the new room's index.
    pub fn add_room(&mut self, initial_row: Option<RoomRow>, clock: &dyn Clock) -> usize {
        let room = match initial_row {
            Some(row) => RoomRecord::from_row(row, clock),
            None => RoomRecord::default(),
        };
        self.push_room(room)
    }

    pub fn push_room(&mut self, room: RoomRecord) -> usize {
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    pub fn remove_room(&mut self, index: usize) -> WorkOrderResult<RoomRecord> {
        if index >= self.rooms.len() {
            return Err(room_not_found(index));
        }
        Ok(self.rooms.remove(index))
    }

    pub fn set_room_field(
        &mut self,
        index: usize,
        field: RoomField,
        value: impl Into<String>,
    ) -> WorkOrderResult<()> {
        self.room_mut(index)?.set_field(field, value);
        Ok(())
    }

    pub fn toggle_room(
        &mut self,
        index: usize,
        flag: CompletionFlag,
        clock: &dyn Clock,
        observer: &mut dyn RoomObserver,
    ) -> WorkOrderResult<CompletionChange> {
        let room = self.room_mut(index)?;
        let change = room.toggle(flag, clock);
        observer.room_changed(index, room, &change);
        Ok(change)
    }

    pub fn set_room_flag(
        &mut self,
        index: usize,
        flag: CompletionFlag,
        value: bool,
        clock: &dyn Clock,
        observer: &mut dyn RoomObserver,
    ) -> WorkOrderResult<CompletionChange> {
        let room = self.room_mut(index)?;
        let change = room.set_flag(flag, value, clock);
        observer.room_changed(index, room, &change);
        Ok(change)
    }

    /// Both header fields must be filled in before the document can be saved.
    pub fn validate_for_save(&self) -> WorkOrderResult<()> {
        if self.work_order.is_empty() || self.project_name.is_empty() {
            return Err(WorkOrderError::Validation(
                "Please enter Work Order # and Project Name before saving".to_string(),
            ));
        }
        Ok(())
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary::from_rooms(&self.rooms)
    }
}

fn room_not_found(index: usize) -> WorkOrderError {
    WorkOrderError::NotFound(format!("room at index {}", index))
}
