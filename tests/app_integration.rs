//! Integration tests for App keyboard interaction scenarios

use coursepick::{Action, App, AppMode, Catalog, CourseId, NoticeKind, Selection, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tempfile::TempDir;

// Helper functions for creating key events
fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
}

fn key_enter() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
}

fn key_esc() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
}

fn key_down() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::empty())
}

fn key_right() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::empty())
}

fn key_left() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::empty())
}

fn key_space() -> KeyEvent {
    KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty())
}

fn key_backspace() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::empty())
}

fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

const CATALOG_CSV: &str = "\
Course Code,Title,Section,Day1,Time1,Day2,Time2,Room1,Room2,Faculty Name,Credit
CSE101,Intro to CS,A,Sun,08:30,Tue,08:30,0601,0601,ABC,3
CSE101,Intro to CS,B,Mon,11:00,Wed,11:00,0602,0602,DEF,3
CSE220,Data Structures,A,Sat,09:00,Thu,09:00,0401,0401,GHI,3
MAT101,Calculus I,A,Sun,14:00,,,0301,,JKL,3
";

fn create_test_app(export_path: PathBuf) -> App {
    let catalog = Catalog::from_reader(CATALOG_CSV.as_bytes()).unwrap();
    App::new(catalog, Selection::new(), "Test".to_string(), export_path)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(key_char(c));
    }
}

fn clear_query(app: &mut App) {
    while !app.query.is_empty() {
        app.handle_key(key_backspace());
    }
}

fn selected_ids(app: &App) -> Vec<CourseId> {
    app.selection.entries().iter().map(|e| e.id()).collect()
}

#[test]
fn test_search_add_duplicate_remove_workflow() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));

    // Search and add CSE101 (A)
    type_str(&mut app, "cse101");
    assert_eq!(app.results.len(), 2);
    app.handle_key(key_enter());
    assert_eq!(app.selection.len(), 1);

    // Adding it again is reported and changes nothing
    app.handle_key(key_enter());
    assert_eq!(app.selection.len(), 1);
    assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Warning);

    // Add CSE101 (B)
    app.handle_key(key_down());
    app.handle_key(key_enter());
    assert_eq!(
        selected_ids(&app),
        vec![CourseId::new("CSE101", "A"), CourseId::new("CSE101", "B")]
    );

    // Switch to Selected tab, mark the first row and remove it
    app.handle_key(key_right());
    assert_eq!(app.active_tab, Tab::Selected);
    app.handle_key(key_space());
    app.handle_key(key_char('r'));
    assert_eq!(selected_ids(&app), vec![CourseId::new("CSE101", "B")]);
    assert_eq!(
        app.notice.as_ref().unwrap().text,
        "✅ Removed 1 course(s)."
    );
}

#[test]
fn test_typing_on_selected_tab_does_not_change_query() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    app.handle_key(key_right());
    type_str(&mut app, "xyz");
    assert_eq!(app.query, "");

    app.handle_key(key_left());
    type_str(&mut app, "mat");
    assert_eq!(app.query, "mat");
    assert_eq!(app.results.len(), 1);
}

#[test]
fn test_results_mark_already_selected_rows() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    type_str(&mut app, "intro");
    app.handle_key(key_enter());

    clear_query(&mut app);
    assert!(app.results.is_empty());

    type_str(&mut app, "intro");
    let first = app.catalog.get(app.results[0]).unwrap();
    assert!(app.selection.is_selected(&first.id()));
}

#[test]
fn test_remove_with_nothing_marked_warns() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    type_str(&mut app, "cse220");
    app.handle_key(key_enter());

    app.handle_key(key_right());
    app.handle_key(key_char('r'));
    assert_eq!(app.selection.len(), 1);
    let notice = app.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.text, "⚠️ Please select course(s) to remove.");
}

#[test]
fn test_clear_all_with_confirmation() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    type_str(&mut app, "cse");
    app.handle_key(key_enter());
    app.handle_key(key_down());
    app.handle_key(key_enter());
    assert_eq!(app.selection.len(), 2);

    app.handle_key(key_right());

    // Esc cancels the modal without quitting
    app.handle_key(key_char('c'));
    assert_eq!(app.mode, AppMode::ConfirmClear);
    let action = app.handle_key(key_esc());
    assert_eq!(action, Action::Continue);
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.selection.len(), 2);

    // Enter confirms
    app.handle_key(key_char('c'));
    app.handle_key(key_enter());
    assert!(app.selection.is_empty());
    assert_eq!(
        app.notice.as_ref().unwrap().text,
        "✅ All selected courses have been cleared."
    );
}

#[test]
fn test_export_and_import_round_trip() {
    let tmp = TempDir::new().unwrap();
    let export_path = tmp.path().join("my_courses.csv");
    let mut app = create_test_app(export_path.clone());

    type_str(&mut app, "a");
    // "a" hits Data Structures and Calculus by title
    assert_eq!(app.results.len(), 2);
    app.handle_key(key_enter());
    app.handle_key(key_down());
    app.handle_key(key_enter());
    let before = app.selection.clone();

    // Ctrl-S exports from the Search tab
    app.handle_key(key_ctrl('s'));
    assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Success);

    let exported = Catalog::load(&export_path).unwrap();
    assert_eq!(exported.offerings(), before.entries());

    // Clear, then import the file back
    app.handle_key(key_right());
    app.handle_key(key_char('c'));
    app.handle_key(key_enter());
    assert!(app.selection.is_empty());

    app.handle_key(key_char('i'));
    assert_eq!(app.selection, before);
}

#[test]
fn test_notice_lasts_one_interaction() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    type_str(&mut app, "cse220");
    app.handle_key(key_enter());
    assert!(app.notice.is_some());

    app.handle_key(key_down());
    assert!(app.notice.is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    assert_eq!(app.handle_key(key_esc()), Action::Quit);

    let mut app = create_test_app(PathBuf::from("unused.csv"));
    assert_eq!(app.handle_key(key_ctrl('c')), Action::Quit);

    // Ctrl-C also quits from the confirmation modal
    let mut app = create_test_app(PathBuf::from("unused.csv"));
    type_str(&mut app, "cse220");
    app.handle_key(key_enter());
    app.handle_key(key_right());
    app.handle_key(key_char('c'));
    assert_eq!(app.mode, AppMode::ConfirmClear);
    assert_eq!(app.handle_key(key_ctrl('c')), Action::Quit);
}
