//! # coursepick - TUI course selector
//!
//! Loads a course catalog from CSV, lets the user search it and build a
//! shortlist, and exports the shortlist as `my_courses.csv`.
//!
//! The library exposes the catalog and selection logic plus the interactive
//! `App` so both can be exercised from integration tests.

pub mod app;
pub mod cli;
pub mod core;
pub mod logging;
pub mod store;
pub mod ui;

// Re-export commonly used types for testing
pub use app::{Action, App, AppMode, Notice, NoticeKind, Tab};
pub use core::catalog::{Catalog, LoadError};
pub use core::offering::{CourseId, CourseOffering};
pub use core::selection::{AddOutcome, Selection};
