use crate::core::catalog::Catalog;
use crate::core::export::{read_export, write_export};
use crate::core::offering::CourseId;
use crate::core::selection::{AddOutcome, Selection};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Search,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    ConfirmClear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line feedback for the last interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub struct App {
    // Navigation
    pub active_tab: Tab,
    pub mode: AppMode,

    // Data
    pub catalog: Catalog,
    pub selection: Selection,

    // Header info
    pub title: String,
    pub export_path: PathBuf,

    // Layout
    visible_height: usize,

    // Search tab UI state
    pub query: String,
    pub results: Vec<usize>,
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Selected tab UI state
    pub sel_index: usize,
    pub sel_scroll_offset: usize,
    pub marked: HashSet<CourseId>,

    pub notice: Option<Notice>,
}

impl App {
    pub fn new(catalog: Catalog, selection: Selection, title: String, export_path: PathBuf) -> Self {
        App {
            active_tab: Tab::Search,
            mode: AppMode::Normal,

            catalog,
            selection,

            title,
            export_path,

            visible_height: 20,

            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,

            sel_index: 0,
            sel_scroll_offset: 0,
            marked: HashSet::new(),

            notice: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Feedback only lives for one interaction
        self.notice = None;

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::ConfirmClear => self.handle_confirm_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('s') => {
                    self.export();
                    Action::Continue
                }
                _ => Action::Continue,
            };
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Up => {
                self.move_selection(-1);
                Action::Continue
            }
            KeyCode::Down => {
                self.move_selection(1);
                Action::Continue
            }
            KeyCode::Left => {
                self.switch_tab(-1);
                Action::Continue
            }
            KeyCode::Right => {
                self.switch_tab(1);
                Action::Continue
            }
            _ => {
                match self.active_tab {
                    Tab::Search => self.handle_search_key(key),
                    Tab::Selected => self.handle_selected_key(key),
                }
                Action::Continue
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_highlighted(),
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => self.delete_char(),
            _ => {}
        }
    }

    fn handle_selected_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.toggle_mark(),
            KeyCode::Char('r') => self.remove_marked(),
            KeyCode::Char('s') => self.export(),
            KeyCode::Char('i') => self.import(),
            KeyCode::Char('c') => self.request_clear(),
            _ => {}
        }
    }

    fn handle_confirm_mode(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Enter | KeyCode::Char('y') => {
                self.confirm_clear();
                Action::Continue
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.mode = AppMode::Normal;
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(1), // header bar
            Constraint::Length(2), // tabs
            Constraint::Length(1), // search input / selection summary
            Constraint::Min(1),    // main content
            Constraint::Length(1), // notice
            Constraint::Length(1), // status bar
        ])
        .split(area);

        // One line of the table area goes to the column header
        self.visible_height = (chunks[3].height as usize).saturating_sub(1).max(1);

        crate::ui::header_bar::render_header_bar(
            frame,
            chunks[0],
            &self.title,
            self.catalog.source(),
            self.catalog.len(),
            self.selection.len(),
            self.selection.total_credits(),
        );

        let selected_label = format!("Selected ({})", self.selection.len());
        let tab_labels = vec!["Search", selected_label.as_str()];
        let active = match self.active_tab {
            Tab::Search => 0,
            Tab::Selected => 1,
        };
        crate::ui::tabs::render_tabs(frame, chunks[1], &tab_labels, active);

        match self.active_tab {
            Tab::Search => {
                crate::ui::search_input::render_search_input(frame, chunks[2], &self.query);
                crate::ui::course_table::render_course_table(
                    frame,
                    chunks[3],
                    &self.catalog,
                    &self.results,
                    self.selected_index,
                    self.scroll_offset,
                    &self.selection,
                    self.query.trim().is_empty(),
                );
            }
            Tab::Selected => {
                crate::ui::selection_table::render_selection_summary(
                    frame,
                    chunks[2],
                    self.selection.len(),
                    self.marked.len(),
                    &self.export_path,
                );
                crate::ui::selection_table::render_selection_table(
                    frame,
                    chunks[3],
                    self.selection.entries(),
                    self.sel_index,
                    self.sel_scroll_offset,
                    &self.marked,
                );
            }
        }

        crate::ui::notice_bar::render_notice_bar(frame, chunks[4], self.notice.as_ref());
        crate::ui::status_bar::render_status_bar(frame, chunks[5], self.active_tab);

        if self.mode == AppMode::ConfirmClear {
            crate::ui::confirm_clear::render_confirm_clear(frame, area, self.selection.len());
        }
    }

    // -- Private helpers --

    fn move_selection(&mut self, delta: i32) {
        match self.active_tab {
            Tab::Search => {
                let len = self.results.len();
                if len == 0 {
                    return;
                }
                self.selected_index = wrap_index(self.selected_index, delta, len);
                ensure_scroll(
                    &mut self.scroll_offset,
                    self.selected_index,
                    self.visible_height,
                );
            }
            Tab::Selected => {
                let len = self.selection.len();
                if len == 0 {
                    return;
                }
                self.sel_index = wrap_index(self.sel_index, delta, len);
                ensure_scroll(
                    &mut self.sel_scroll_offset,
                    self.sel_index,
                    self.visible_height,
                );
            }
        }
    }

    fn switch_tab(&mut self, delta: i32) {
        match (self.active_tab, delta) {
            (Tab::Search, 1) => self.active_tab = Tab::Selected,
            (Tab::Selected, -1) => self.active_tab = Tab::Search,
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        self.query.push(c);
        self.update_results();
    }

    fn delete_char(&mut self) {
        self.query.pop();
        self.update_results();
    }

    /// Recompute search results. A blank query means "no search", not
    /// "everything".
    fn update_results(&mut self) {
        let term = self.query.trim();
        self.results = if term.is_empty() {
            Vec::new()
        } else {
            self.catalog.search(term)
        };
        tracing::debug!(query = %term, hits = self.results.len(), "Search updated");
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    fn add_highlighted(&mut self) {
        let Some(offering) = self
            .results
            .get(self.selected_index)
            .and_then(|&i| self.catalog.get(i))
        else {
            return;
        };

        let notice = match self.selection.add(offering) {
            AddOutcome::Added => {
                tracing::info!(code = %offering.code, section = %offering.section, "Course added");
                Notice::new(
                    NoticeKind::Success,
                    format!("✅ Added {} - {}", offering.code, offering.section),
                )
            }
            AddOutcome::AlreadyPresent => {
                tracing::warn!(code = %offering.code, section = %offering.section, "Course already added");
                Notice::new(
                    NoticeKind::Warning,
                    format!(
                        "⚠️ {} - {} is already added.",
                        offering.code, offering.section
                    ),
                )
            }
        };
        self.notice = Some(notice);
    }

    fn toggle_mark(&mut self) {
        let Some(entry) = self.selection.entries().get(self.sel_index) else {
            return;
        };
        let id = entry.id();
        if !self.marked.remove(&id) {
            self.marked.insert(id);
        }
    }

    fn remove_marked(&mut self) {
        if self.marked.is_empty() {
            self.notice = Some(Notice::new(
                NoticeKind::Warning,
                "⚠️ Please select course(s) to remove.",
            ));
            return;
        }

        let removed = self.selection.remove(&self.marked);
        tracing::info!(requested = self.marked.len(), removed, "Courses removed");
        self.marked.clear();
        self.clamp_sel_index();
        self.notice = Some(Notice::new(
            NoticeKind::Success,
            format!("✅ Removed {} course(s).", removed),
        ));
    }

    fn request_clear(&mut self) {
        if self.selection.is_empty() {
            self.notice = Some(Notice::new(NoticeKind::Info, "No courses added yet."));
            return;
        }
        self.mode = AppMode::ConfirmClear;
    }

    fn confirm_clear(&mut self) {
        let count = self.selection.len();
        self.selection.clear();
        self.marked.clear();
        self.sel_index = 0;
        self.sel_scroll_offset = 0;
        self.mode = AppMode::Normal;
        tracing::info!(count, "Selection cleared");
        self.notice = Some(Notice::new(
            NoticeKind::Success,
            "✅ All selected courses have been cleared.",
        ));
    }

    fn export(&mut self) {
        if self.selection.is_empty() {
            self.notice = Some(Notice::new(
                NoticeKind::Warning,
                "⚠️ No courses added yet, nothing to export.",
            ));
            return;
        }

        let notice = match write_export(&self.export_path, &self.selection) {
            Ok(count) => Notice::new(
                NoticeKind::Success,
                format!(
                    "⬇️ Saved {} course(s) to {}",
                    count,
                    self.export_path.display()
                ),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                Notice::new(NoticeKind::Error, format!("Export failed: {e}"))
            }
        };
        self.notice = Some(notice);
    }

    fn import(&mut self) {
        let notice = match read_export(&self.export_path) {
            Ok(table) => {
                let report = self.selection.import(&table);
                tracing::info!(
                    path = %self.export_path.display(),
                    added = report.added,
                    duplicates = report.duplicates,
                    "Selection imported"
                );
                Notice::new(
                    NoticeKind::Success,
                    format!(
                        "✅ Imported {} course(s) from {} ({} already added)",
                        report.added,
                        self.export_path.display(),
                        report.duplicates
                    ),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "Import failed");
                Notice::new(NoticeKind::Error, format!("Import failed: {e}"))
            }
        };
        self.notice = Some(notice);
    }

    fn clamp_sel_index(&mut self) {
        let len = self.selection.len();
        if self.sel_index >= len {
            self.sel_index = len.saturating_sub(1);
        }
        if self.sel_scroll_offset > self.sel_index {
            self.sel_scroll_offset = self.sel_index;
        }
    }
}

/// Wrap index with delta, cycling around `len`.
fn wrap_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let new = current as i32 + delta;
    if new < 0 {
        len - 1
    } else if new >= len as i32 {
        0
    } else {
        new as usize
    }
}

/// Adjust scroll_offset so that `selected` stays visible within the given height.
fn ensure_scroll(scroll_offset: &mut usize, selected: usize, visible_height: usize) {
    if selected < *scroll_offset {
        *scroll_offset = selected;
    }
    let height = visible_height.max(1);
    if selected >= *scroll_offset + height {
        *scroll_offset = selected.saturating_sub(height - 1);
    }
}
