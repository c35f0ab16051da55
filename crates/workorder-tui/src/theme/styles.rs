//! Visual attributes derived from model state. Nothing here mutates the
//! document.

use super::colors::*;
use ratatui::style::{Modifier, Style};
use workorder_domain::RoomRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Complete,
    Pending,
}

impl RoomStatus {
    pub fn of(room: &RoomRecord) -> Self {
        if room.is_complete() {
            RoomStatus::Complete
        } else {
            RoomStatus::Pending
        }
    }
}

pub fn room_row_style(room: &RoomRecord, selected: bool) -> Style {
    let color = match RoomStatus::of(room) {
        RoomStatus::Complete => ROOM_COMPLETE,
        RoomStatus::Pending => ROOM_PENDING,
    };
    let style = Style::default().fg(color);
    if selected {
        style.bg(SELECTED_BG)
    } else {
        style
    }
}

pub fn selected_cell() -> Style {
    Style::default()
        .fg(POPUP_BG)
        .bg(SELECTED_CELL_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style(is_error: bool) -> Style {
    if is_error {
        Style::default().fg(ERROR_COLOR)
    } else {
        Style::default().fg(SUCCESS_COLOR)
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use workorder_core::SystemClock;
    use workorder_domain::CompletionFlag;

    #[test]
    fn test_row_colour_follows_completion() {
        let mut room = RoomRecord::new("Pantry", "Base", "Shaker", "4");
        assert_eq!(RoomStatus::of(&room), RoomStatus::Pending);
        assert_eq!(room_row_style(&room, false).fg, Some(ROOM_PENDING));

        room.set_flag(CompletionFlag::Nests, true, &SystemClock);
        room.set_flag(CompletionFlag::Labels, true, &SystemClock);
        assert_eq!(RoomStatus::of(&room), RoomStatus::Complete);
        assert_eq!(room_row_style(&room, false).fg, Some(ROOM_COMPLETE));
        assert_eq!(room_row_style(&room, true).bg, Some(SELECTED_BG));
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
