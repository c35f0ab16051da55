use serde::{Deserialize, Serialize};
use workorder_core::Clock;

/// `YYYY-MM-DD HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored in place of a completion time when a room is not finished.
pub const NOT_COMPLETED: &str = "Not Completed";

const YES: &str = "Yes";
const NO: &str = "No";

/// Positional form of a room:
/// name, type, door style, nests, labels, door count, completion time.
pub type RoomRow = [String; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomField {
    RoomName,
    RoomType,
    DoorStyle,
    DoorCount,
}

impl RoomField {
    pub const ALL: [RoomField; 4] = [
        RoomField::RoomName,
        RoomField::RoomType,
        RoomField::DoorStyle,
        RoomField::DoorCount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoomField::RoomName => "Room Name",
            RoomField::RoomType => "Room Type",
            RoomField::DoorStyle => "Door Style",
            RoomField::DoorCount => "Door Count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionFlag {
    Nests,
    Labels,
}

impl CompletionFlag {
    pub fn label(self) -> &'static str {
        match self {
            CompletionFlag::Nests => "Nests",
            CompletionFlag::Labels => "Labels",
        }
    }
}

/// Outcome of recomputing a room's completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionChange {
    /// Both flags just became true; the room was stamped.
    Completed { at: String },
    /// A flag went false and the stamp was dropped.
    Cleared,
    Unchanged,
}

/// One room of a work order.
///
/// The string fields are free-form. The completion flags and timestamp are
/// kept private so that `completion_time` is present exactly when both flags
/// are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomRecord {
    pub room_name: String,
    pub room_type: String,
    pub door_style: String,
    nests_done: bool,
    labels_done: bool,
    pub door_count: String,
    completion_time: Option<String>,
}

impl RoomRecord {
    pub fn new(
        room_name: impl Into<String>,
        room_type: impl Into<String>,
        door_style: impl Into<String>,
        door_count: impl Into<String>,
    ) -> Self {
        Self {
            room_name: room_name.into(),
            room_type: room_type.into(),
            door_style: door_style.into(),
            door_count: door_count.into(),
            ..Default::default()
        }
    }

    pub fn field(&self, field: RoomField) -> &str {
        match field {
            RoomField::RoomName => &self.room_name,
            RoomField::RoomType => &self.room_type,
            RoomField::DoorStyle => &self.door_style,
            RoomField::DoorCount => &self.door_count,
        }
    }

    pub fn set_field(&mut self, field: RoomField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RoomField::RoomName => self.room_name = value,
            RoomField::RoomType => self.room_type = value,
            RoomField::DoorStyle => self.door_style = value,
            RoomField::DoorCount => self.door_count = value,
        }
    }

    pub fn nests_done(&self) -> bool {
        self.nests_done
    }

    pub fn labels_done(&self) -> bool {
        self.labels_done
    }

    pub fn flag(&self, flag: CompletionFlag) -> bool {
        match flag {
            CompletionFlag::Nests => self.nests_done,
            CompletionFlag::Labels => self.labels_done,
        }
    }

    pub fn completion_time(&self) -> Option<&str> {
        self.completion_time.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.nests_done && self.labels_done
    }

    pub fn toggle(&mut self, flag: CompletionFlag, clock: &dyn Clock) -> CompletionChange {
        let current = self.flag(flag);
        self.set_flag(flag, !current, clock)
    }

    pub fn set_flag(
        &mut self,
        flag: CompletionFlag,
        value: bool,
        clock: &dyn Clock,
    ) -> CompletionChange {
        match flag {
            CompletionFlag::Nests => self.nests_done = value,
            CompletionFlag::Labels => self.labels_done = value,
        }
        self.recompute_completion(clock)
    }

    fn recompute_completion(&mut self, clock: &dyn Clock) -> CompletionChange {
        if self.is_complete() {
            if self.completion_time.is_some() {
                return CompletionChange::Unchanged;
            }
            let at = clock.now().format(TIMESTAMP_FORMAT).to_string();
            self.completion_time = Some(at.clone());
            CompletionChange::Completed { at }
        } else if self.completion_time.take().is_some() {
            CompletionChange::Cleared
        } else {
            CompletionChange::Unchanged
        }
    }

    pub fn to_row(&self) -> RoomRow {
        [
            self.room_name.clone(),
            self.room_type.clone(),
            self.door_style.clone(),
            yes_no(self.nests_done).to_string(),
            yes_no(self.labels_done).to_string(),
            self.door_count.clone(),
            self.completion_time
                .clone()
                .unwrap_or_else(|| NOT_COMPLETED.to_string()),
        ]
    }

    /// Rebuilds a room from its row form.
    ///
    /// A stored timestamp is kept verbatim. Rows whose flags disagree with the
    /// timestamp are reconciled: a finished room without a time is stamped now,
    /// an unfinished room loses any time it carried.
    pub fn from_row(row: RoomRow, clock: &dyn Clock) -> Self {
        let [room_name, room_type, door_style, nests, labels, door_count, completion] = row;
        let completion_time = match completion.as_str() {
            "" | NOT_COMPLETED => None,
            _ => Some(completion),
        };

        let mut room = Self {
            room_name,
            room_type,
            door_style,
            nests_done: nests == YES,
            labels_done: labels == YES,
            door_count,
            completion_time,
        };
        room.recompute_completion(clock);
        room
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        YES
    } else {
        NO
    }
}
