use crate::room::RoomRecord;
use serde::Serialize;

/// Aggregate view of a work order, computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub total_rooms: usize,
    pub completed_rooms: usize,
    pub total_doors: u64,
    /// Rooms whose door count is not a whole number (including blank).
    pub unparsed_door_counts: usize,
}

impl DocumentSummary {
    pub fn from_rooms(rooms: &[RoomRecord]) -> Self {
        rooms.iter().fold(Self::default(), |mut summary, room| {
            summary.total_rooms += 1;
            if room.is_complete() {
                summary.completed_rooms += 1;
            }
            match room.door_count.trim().parse::<u64>() {
                Ok(count) => summary.total_doors += count,
                Err(_) => summary.unparsed_door_counts += 1,
            }
            summary
        })
    }

    pub fn is_finished(&self) -> bool {
        self.total_rooms > 0 && self.completed_rooms == self.total_rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::CompletionFlag;
    use workorder_core::SystemClock;

    #[test]
    fn test_summary_counts() {
        let mut done = RoomRecord::new("Pantry", "Base", "Shaker", "4");
        done.set_flag(CompletionFlag::Nests, true, &SystemClock);
        done.set_flag(CompletionFlag::Labels, true, &SystemClock);
        let rooms = vec![
            done,
            RoomRecord::new("Kitchen", "Upper", "Shaker", " 10 "),
            RoomRecord::new("Bath", "Vanity", "Slab", "a few"),
        ];

        let summary = DocumentSummary::from_rooms(&rooms);
        assert_eq!(summary.total_rooms, 3);
        assert_eq!(summary.completed_rooms, 1);
        assert_eq!(summary.total_doors, 14);
        assert_eq!(summary.unparsed_door_counts, 1);
        assert!(!summary.is_finished());
    }

    #[test]
    fn test_empty_is_not_finished() {
        let summary = DocumentSummary::from_rooms(&[]);
        assert_eq!(summary, DocumentSummary::default());
        assert!(!summary.is_finished());
    }
}
