use workorder_domain::{CompletionFlag, RoomField};

/// A focusable column of the room table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text(RoomField),
    Flag(CompletionFlag),
}

/// Focusable columns, in display order. The completion time column is
/// derived and never takes focus.
pub const FOCUSABLE_COLUMNS: [ColumnKind; 6] = [
    ColumnKind::Text(RoomField::RoomName),
    ColumnKind::Text(RoomField::RoomType),
    ColumnKind::Text(RoomField::DoorStyle),
    ColumnKind::Flag(CompletionFlag::Nests),
    ColumnKind::Flag(CompletionFlag::Labels),
    ColumnKind::Text(RoomField::DoorCount),
];

#[derive(Debug, Clone, Default)]
pub struct CellSelection {
    row: Option<usize>,
    column: usize,
}

impl CellSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn column_kind(&self) -> ColumnKind {
        FOCUSABLE_COLUMNS[self.column]
    }

    pub fn set_row(&mut self, row: Option<usize>) {
        self.row = row;
    }

    pub fn next_row(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.row = Some(match self.row {
            Some(idx) => (idx + 1).min(row_count - 1),
            None => 0,
        });
    }

    pub fn prev_row(&mut self) {
        self.row = Some(match self.row {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn next_column(&mut self) {
        self.column = (self.column + 1).min(FOCUSABLE_COLUMNS.len() - 1);
    }

    pub fn prev_column(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    /// Keeps the row inside `0..row_count` after rooms are removed or replaced.
    pub fn clamp(&mut self, row_count: usize) {
        self.row = match (self.row, row_count) {
            (_, 0) => None,
            (Some(idx), n) => Some(idx.min(n - 1)),
            (None, _) => Some(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_navigation() {
        let mut selection = CellSelection::new();
        selection.next_row(0);
        assert_eq!(selection.row(), None);

        selection.next_row(2);
        selection.next_row(2);
        selection.next_row(2);
        assert_eq!(selection.row(), Some(1));

        selection.prev_row();
        selection.prev_row();
        assert_eq!(selection.row(), Some(0));
    }

    #[test]
    fn test_column_navigation_stops_at_edges() {
        let mut selection = CellSelection::new();
        selection.prev_column();
        assert_eq!(selection.column_kind(), ColumnKind::Text(RoomField::RoomName));

        for _ in 0..10 {
            selection.next_column();
        }
        assert_eq!(selection.column_kind(), ColumnKind::Text(RoomField::DoorCount));
    }

    #[test]
    fn test_clamp() {
        let mut selection = CellSelection::new();
        selection.set_row(Some(4));
        selection.clamp(2);
        assert_eq!(selection.row(), Some(1));
        selection.clamp(0);
        assert_eq!(selection.row(), None);
        selection.clamp(3);
        assert_eq!(selection.row(), Some(0));
    }
}
