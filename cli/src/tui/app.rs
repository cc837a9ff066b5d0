use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use tasklist_core::{DashboardView, Labels, TaskStore};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub store: TaskStore,
    pub labels: &'static Labels,
    pub state: TableState,
    pub input_mode: InputMode,
    /// Cursor position in the pending input, counted in chars.
    pub cursor_position: usize,
    pub validation: Option<&'static str>,
    pub should_quit: bool,
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(labels: &'static Labels) -> App {
        let mut store = TaskStore::new();
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        App {
            store,
            labels,
            state: TableState::default(),
            input_mode: InputMode::Editing,
            cursor_position: 0,
            validation: None,
            should_quit: false,
            dirty,
        }
    }

    /// Adds startup tasks; control characters become spaces so rows stay one line.
    pub fn seed(&mut self, tasks: &[String]) {
        for text in tasks {
            let text: String = text
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            self.store.add_task(&text);
        }
        if !self.store.is_empty() && self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::derive(&self.store, self.labels)
    }

    /// Returns whether a redraw is due and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty.set(true);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        // Ctrl/Alt chords are not bound to anything.
        if !KeyModifiers::SHIFT.contains(key.modifiers) {
            return;
        }

        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => self.enter_editing(),
                _ => {}
            },
            InputMode::Editing => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Esc | KeyCode::Tab => self.exit_editing(),
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Delete => self.delete_char_forward(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                KeyCode::Home => self.move_cursor(0),
                KeyCode::End => self.move_cursor(self.input_len()),
                _ => {}
            },
        }
    }

    pub fn next(&mut self) {
        let len = self.store.total_count();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
        self.mark_dirty();
    }

    pub fn previous(&mut self) {
        let len = self.store.total_count();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.state.select(Some(i));
        self.mark_dirty();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_task(&id);
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(i) = self.state.selected() else {
            return;
        };
        if let Some(id) = self.selected_id() {
            self.store.delete_task(&id);
        }

        let len = self.store.total_count();
        if len == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(i.min(len - 1)));
        }
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.state
            .selected()
            .and_then(|i| self.store.tasks().get(i))
            .map(|t| t.id)
    }

    pub fn enter_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.input_len();
        self.mark_dirty();
    }

    pub fn exit_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        if self.state.selected().is_none() && !self.store.is_empty() {
            self.state.select(Some(0));
        }
        self.mark_dirty();
    }

    pub fn submit(&mut self) {
        if !self.store.can_submit() {
            warn!("rejected blank submission");
            self.validation = Some(self.labels.required_field);
            self.mark_dirty();
            return;
        }

        if self.store.submit().is_some() {
            self.cursor_position = 0;
            self.state.select(Some(self.store.total_count() - 1));
        }
    }

    fn input_len(&self) -> usize {
        self.store.pending_input().chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.store
            .pending_input()
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or_else(|| self.store.pending_input().len())
    }

    fn edit_input(&mut self, input: String) {
        self.validation = None;
        self.store.set_pending_input(&input);
        self.mark_dirty();
    }

    pub fn input_char(&mut self, c: char) {
        let mut input = self.store.pending_input().to_string();
        input.insert(self.byte_index(self.cursor_position), c);
        self.cursor_position += 1;
        self.edit_input(input);
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let mut input = self.store.pending_input().to_string();
        input.remove(self.byte_index(self.cursor_position - 1));
        self.cursor_position -= 1;
        self.edit_input(input);
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position >= self.input_len() {
            return;
        }
        let mut input = self.store.pending_input().to_string();
        input.remove(self.byte_index(self.cursor_position));
        self.edit_input(input);
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.move_cursor(self.cursor_position - 1);
        }
    }

    pub fn move_cursor_right(&mut self) {
        self.move_cursor(self.cursor_position + 1);
    }

    fn move_cursor(&mut self, position: usize) {
        self.cursor_position = position.min(self.input_len());
        self.mark_dirty();
    }
}
