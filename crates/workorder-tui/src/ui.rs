use crate::app::{App, AppMode};
use crate::selection::{ColumnKind, FOCUSABLE_COLUMNS};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};
use workorder_domain::{RoomRecord, NOT_COMPLETED};

const COLUMN_TITLES: [&str; 7] = [
    "Room Name",
    "Room Type",
    "Door Style",
    "Nests",
    "Labels",
    "Door Count",
    "Completion Time",
];

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_rooms(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::EditCell(field) => render_input_popup(app, frame, "Edit Room", field.label()),
        AppMode::EditWorkOrder => render_input_popup(app, frame, "Work Order", "Work Order #:"),
        AppMode::EditProjectName => {
            render_input_popup(app, frame, "Project", "Project Name:")
        }
        AppMode::SaveAs => render_input_popup(app, frame, "Save to CSV", "File path:"),
        AppMode::Open => render_input_popup(app, frame, "Load CSV", "File path:"),
        AppMode::ConfirmDelete => render_confirm_delete(app, frame),
        AppMode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let document = app.controller.document();
    let summary = document.summary();
    let file_label = app
        .file_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unsaved)".to_string());

    let mut spans = vec![
        Span::styled("Work Order #: ", label_text()),
        Span::styled(document.work_order.clone(), bold_highlight()),
        Span::raw("   "),
        Span::styled("Project Name: ", label_text()),
        Span::styled(document.project_name.clone(), bold_highlight()),
        Span::raw("   "),
        Span::styled(
            format!(
                "{}/{} rooms complete, {} doors",
                summary.completed_rooms, summary.total_rooms, summary.total_doors
            ),
            normal_text(),
        ),
    ];
    if app.dirty {
        spans.push(Span::styled("  [modified]", highlight_text()));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Work Order Entry - {}", file_label)),
    );
    frame.render_widget(header, area);
}

fn render_rooms(app: &App, frame: &mut Frame, area: Rect) {
    let selected_row = app.selection.row();
    let rows: Vec<Row> = app
        .controller
        .document()
        .rooms()
        .iter()
        .enumerate()
        .map(|(idx, room)| {
            let is_selected = selected_row == Some(idx);
            room_row(room, is_selected.then(|| app.selection.column()))
                .style(room_row_style(room, is_selected))
        })
        .collect();

    let header = Row::new(COLUMN_TITLES.iter().map(|t| Cell::from(*t))).style(bold_highlight());
    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(11),
        Constraint::Min(19),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border())
            .title("Rooms"),
    );

    let mut state = TableState::default().with_selected(selected_row);
    frame.render_stateful_widget(table, area, &mut state);
}

/// Builds one table row; `focused_column` marks the cell under the cursor.
fn room_row(room: &RoomRecord, focused_column: Option<usize>) -> Row<'static> {
    let mut cells: Vec<Cell> = FOCUSABLE_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, kind)| {
            let text = match kind {
                ColumnKind::Text(field) => room.field(*field).to_string(),
                ColumnKind::Flag(flag) => checkbox(room.flag(*flag)).to_string(),
            };
            let cell = Cell::from(text);
            if focused_column == Some(col) {
                cell.style(selected_cell())
            } else {
                cell
            }
        })
        .collect();
    cells.push(Cell::from(
        room.completion_time().unwrap_or(NOT_COMPLETED).to_string(),
    ));
    Row::new(cells)
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            status_style(status.is_error),
        )),
        None => Line::from(Span::styled(
            "a: add room | enter: edit/toggle | n: nests | L: labels | w: work order | p: project | d: delete | s: save | o: load | q: quit",
            label_text(),
        )),
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_input_popup(app: &App, frame: &mut Frame, title: &str, label: &str) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(label.to_string()).style(highlight_text()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(app.input.as_str().to_string())
            .style(normal_text())
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new("enter: confirm | esc: cancel").style(label_text()),
        chunks[2],
    );

    let cursor_x = chunks[1].x + app.input.cursor_pos() as u16 + 1;
    let cursor_y = chunks[1].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn render_confirm_delete(app: &App, frame: &mut Frame) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let name = app
        .selection
        .row()
        .and_then(|row| app.controller.document().room(row).ok())
        .map(|room| room.room_name.clone())
        .unwrap_or_default();

    let text = format!("Remove room \"{}\"? (y/n)", name);
    let popup = Paragraph::new(text).style(normal_text()).block(
        Block::default()
            .title("Remove Room")
            .borders(Borders::ALL)
            .style(popup_bg()),
    );
    frame.render_widget(popup, area);
}
