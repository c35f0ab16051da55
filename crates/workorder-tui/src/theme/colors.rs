use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const SELECTED_BG: Color = Color::Blue;
pub const SELECTED_CELL_BG: Color = Color::Cyan;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const ROOM_COMPLETE: Color = Color::LightGreen;
pub const ROOM_PENDING: Color = Color::Gray;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
pub const SUCCESS_COLOR: Color = Color::Green;
