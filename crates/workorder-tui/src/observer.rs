use workorder_domain::{CompletionChange, RoomObserver, RoomRecord};

/// Records completion changes in the debug log.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl RoomObserver for LoggingObserver {
    fn room_changed(&mut self, index: usize, room: &RoomRecord, change: &CompletionChange) {
        match change {
            CompletionChange::Completed { at } => {
                tracing::info!("Room {} ({}) completed at {}", index, room.room_name, at)
            }
            CompletionChange::Cleared => {
                tracing::info!("Room {} ({}) no longer complete", index, room.room_name)
            }
            CompletionChange::Unchanged => {}
        }
    }
}
