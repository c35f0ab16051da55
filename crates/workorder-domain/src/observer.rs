use crate::room::{CompletionChange, RoomRecord};

/// Receives a callback after a room's completion flags change.
///
/// Nothing in the model depends on observers; they exist so a front end can
/// refresh aggregate views without the room knowing about it.
#[cfg_attr(test, mockall::automock)]
pub trait RoomObserver {
    fn room_changed(&mut self, index: usize, room: &RoomRecord, change: &CompletionChange);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RoomObserver for NoopObserver {
    fn room_changed(&mut self, _index: usize, _room: &RoomRecord, _change: &CompletionChange) {}
}
