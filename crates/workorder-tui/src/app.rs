use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::input::InputState;
use crate::observer::LoggingObserver;
use crate::selection::{CellSelection, ColumnKind};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use workorder_domain::{CompletionFlag, RoomField};
use workorder_persistence::DocumentController;

const DEFAULT_FILE_NAME: &str = "workorder.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditCell(RoomField),
    EditWorkOrder,
    EditProjectName,
    SaveAs,
    Open,
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub controller: DocumentController,
    pub file_path: Option<PathBuf>,
    pub selection: CellSelection,
    pub status: Option<StatusMessage>,
    pub dirty: bool,
}

impl App {
    /// Opens the form, loading `file_path` when it already exists.
    ///
    /// A file that fails to load is not remembered as the save target, so the
    /// broken file is never overwritten by accident.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        let controller = DocumentController::new().with_observer(LoggingObserver);
        let mut app = Self::with_controller(controller, None);

        if let Some(path) = file_path {
            if path.exists() {
                app.open_file(path);
            } else {
                tracing::info!("Starting new work order at {}", path.display());
                app.file_path = Some(path);
            }
        }
        app
    }

    pub fn with_controller(controller: DocumentController, file_path: Option<PathBuf>) -> Self {
        let mut selection = CellSelection::new();
        selection.clamp(controller.document().room_count());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            controller,
            file_path,
            selection,
            status: None,
            dirty: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::ConfirmDelete => self.handle_confirm_delete(key.code),
            AppMode::EditCell(_) | AppMode::EditWorkOrder | AppMode::EditProjectName => {
                self.handle_text_prompt(key.code, true)
            }
            AppMode::SaveAs | AppMode::Open => self.handle_text_prompt(key.code, false),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let room_count = self.controller.document().room_count();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('a') => self.add_room(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next_row(room_count),
            KeyCode::Char('k') | KeyCode::Up => {
                if room_count > 0 {
                    self.selection.prev_row();
                }
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.selection.next_column(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.selection.prev_column()
            }
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char(' ') => self.activate_cell(),
            KeyCode::Char('n') => self.toggle_selected(CompletionFlag::Nests),
            KeyCode::Char('L') => self.toggle_selected(CompletionFlag::Labels),
            KeyCode::Char('w') => {
                let current = self.controller.document().work_order.clone();
                self.open_prompt(AppMode::EditWorkOrder, current);
            }
            KeyCode::Char('p') => {
                let current = self.controller.document().project_name.clone();
                self.open_prompt(AppMode::EditProjectName, current);
            }
            KeyCode::Char('d') => {
                if self.selection.row().is_some() {
                    self.mode = AppMode::ConfirmDelete;
                }
            }
            KeyCode::Char('s') => {
                let suggested = self
                    .file_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
                self.open_prompt(AppMode::SaveAs, suggested);
            }
            KeyCode::Char('o') => {
                let suggested = self
                    .file_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.open_prompt(AppMode::Open, suggested);
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, mode: AppMode, initial: String) {
        self.input.set(initial);
        self.mode = mode;
    }

    fn close_prompt(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
    }

    fn handle_text_prompt(&mut self, key_code: KeyCode, allow_empty: bool) {
        match handle_dialog_input(&mut self.input, key_code, allow_empty) {
            DialogAction::Confirm => {
                let value = self.input.as_str().to_string();
                let mode = self.mode;
                self.close_prompt();
                self.apply_prompt(mode, value);
            }
            DialogAction::Cancel => self.close_prompt(),
            DialogAction::None => {}
        }
    }

    fn apply_prompt(&mut self, mode: AppMode, value: String) {
        match mode {
            AppMode::EditCell(field) => {
                if let Some(row) = self.selection.row() {
                    match self.controller.set_room_field(row, field, value) {
                        Ok(()) => self.dirty = true,
                        Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
                    }
                }
            }
            AppMode::EditWorkOrder => {
                self.controller.set_work_order(value);
                self.dirty = true;
            }
            AppMode::EditProjectName => {
                self.controller.set_project_name(value);
                self.dirty = true;
            }
            AppMode::SaveAs => self.save_to(PathBuf::from(value)),
            AppMode::Open => self.open_file(PathBuf::from(value)),
            AppMode::Normal | AppMode::ConfirmDelete => {}
        }
    }

    fn handle_confirm_delete(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.mode = AppMode::Normal;
                self.delete_selected();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn add_room(&mut self) {
        let index = self.controller.add_room(None);
        self.selection.set_row(Some(index));
        self.dirty = true;
        tracing::debug!("Added room at index {}", index);
    }

    fn delete_selected(&mut self) {
        if let Some(row) = self.selection.row() {
            match self.controller.remove_room(row) {
                Ok(room) => {
                    tracing::debug!("Removed room {:?}", room.room_name);
                    self.dirty = true;
                }
                Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
            }
            self.selection
                .clamp(self.controller.document().room_count());
        }
    }

    fn activate_cell(&mut self) {
        let Some(row) = self.selection.row() else {
            return;
        };
        match self.selection.column_kind() {
            ColumnKind::Flag(flag) => self.toggle_selected(flag),
            ColumnKind::Text(field) => {
                let current = self
                    .controller
                    .document()
                    .room(row)
                    .map(|room| room.field(field).to_string())
                    .unwrap_or_default();
                self.open_prompt(AppMode::EditCell(field), current);
            }
        }
    }

    fn toggle_selected(&mut self, flag: CompletionFlag) {
        if let Some(row) = self.selection.row() {
            match self.controller.toggle_room(row, flag) {
                Ok(_) => self.dirty = true,
                Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
            }
        }
    }

    fn save_to(&mut self, path: PathBuf) {
        match self.controller.save(&path) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!(
                    "Data saved to {} successfully!",
                    path.display()
                )));
                self.file_path = Some(path);
                self.dirty = false;
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", path.display(), e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn open_file(&mut self, path: PathBuf) {
        match self.controller.load(&path) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!(
                    "Data loaded from {} successfully!",
                    path.display()
                )));
                self.selection.set_row(None);
                self.selection
                    .clamp(self.controller.document().room_count());
                self.file_path = Some(path);
                self.dirty = false;
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let events = EventHandler::default();
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            if let Event::Key(key) = events.next()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}
