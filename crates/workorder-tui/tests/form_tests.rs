use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use tempfile::tempdir;
use workorder_domain::RoomRecord;
use workorder_persistence::DocumentController;
use workorder_tui::{App, AppMode};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn replace_prompt(app: &mut App, text: &str) {
    press(app, KeyCode::End);
    for _ in 0..app.input.as_str().chars().count() {
        press(app, KeyCode::Backspace);
    }
    type_text(app, text);
    press(app, KeyCode::Enter);
}

const HEADER_LINE: &str = "Work Order #,Project Name,Room Name,Room Type,Door Style,Nests,Labels,Door Count,Completion Time";

#[test]
fn test_fill_in_and_save_work_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kitchen.csv");
    let mut app = App::new(Some(path.clone()));
    assert_eq!(app.file_path.as_deref(), Some(path.as_path()));

    press(&mut app, KeyCode::Char('w'));
    assert_eq!(app.mode, AppMode::EditWorkOrder);
    type_text(&mut app, "WO-100");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('p'));
    type_text(&mut app, "Kitchen Remodel");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Pantry");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Base");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Shaker");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('n'));
    app.handle_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('l'));
    }
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "4");
    press(&mut app, KeyCode::Enter);
    assert!(app.dirty);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.mode, AppMode::SaveAs);
    press(&mut app, KeyCode::Enter);

    let status = app.status.clone().unwrap();
    assert!(!status.is_error, "{}", status.text);
    assert!(!app.dirty);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER_LINE);
    assert!(lines[1].starts_with("WO-100,Kitchen Remodel,Pantry,Base,Shaker,Yes,Yes,4,"));
    let timestamp = lines[1].rsplit(',').next().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_save_without_header_fields_reports_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("order.csv");
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('s'));
    replace_prompt(&mut app, path.to_str().unwrap());

    let status = app.status.clone().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("Work Order #"));
    assert!(!path.exists());
    assert_eq!(app.file_path, None);
}

#[test]
fn test_open_replaces_document_and_failed_open_keeps_it() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.csv");
    let bad = dir.path().join("bad.csv");
    fs::write(
        &good,
        format!(
            "{}\nWO-7,Bath,Vanity,Base,Slab,Yes,No,2,Not Completed\nWO-8,Other,Linen,Tall,Slab,No,No,1,Not Completed\n",
            HEADER_LINE
        ),
    )
    .unwrap();
    fs::write(&bad, format!("{}\n", HEADER_LINE)).unwrap();

    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('o'));
    replace_prompt(&mut app, good.to_str().unwrap());

    let document = app.controller.document().clone();
    assert_eq!(document.work_order, "WO-7");
    assert_eq!(document.project_name, "Bath");
    assert_eq!(document.room_count(), 2);
    assert_eq!(app.selection.row(), Some(0));
    assert_eq!(app.file_path.as_deref(), Some(good.as_path()));

    press(&mut app, KeyCode::Char('o'));
    replace_prompt(&mut app, bad.to_str().unwrap());

    assert!(app.status.as_ref().unwrap().is_error);
    assert_eq!(app.controller.document(), &document);
    assert_eq!(app.file_path.as_deref(), Some(good.as_path()));
}

#[test]
fn test_broken_startup_file_is_not_save_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "only a header\n").unwrap();

    let app = App::new(Some(path));
    assert!(app.status.unwrap().is_error);
    assert_eq!(app.file_path, None);
}

#[test]
fn test_toggle_and_delete_rooms() {
    let mut controller = DocumentController::new();
    controller.push_room(RoomRecord::new("Kitchen", "Base", "Shaker", "10"));
    controller.push_room(RoomRecord::new("Pantry", "Tall", "Shaker", "2"));
    let mut app = App::with_controller(controller, None);
    assert_eq!(app.selection.row(), Some(0));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('n'));
    app.handle_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
    let pantry = app.controller.document().room(1).unwrap().clone();
    assert!(pantry.is_complete());
    assert!(pantry.completion_time().is_some());

    app.handle_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
    assert_eq!(app.controller.document().room(1).unwrap().completion_time(), None);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, AppMode::ConfirmDelete);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.controller.document().room_count(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.controller.document().room_count(), 1);
    assert_eq!(app.selection.row(), Some(0));
    assert_eq!(app.controller.document().rooms()[0].room_name, "Kitchen");
}

#[test]
fn test_escape_discards_cell_edit() {
    let mut controller = DocumentController::new();
    controller.push_room(RoomRecord::new("Kitchen", "Base", "Shaker", "10"));
    let mut app = App::with_controller(controller, None);

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.mode, AppMode::EditCell(_)));
    type_text(&mut app, " changed");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.controller.document().rooms()[0].room_name, "Kitchen");
    assert!(!app.dirty);
}

#[test]
fn test_quit() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
