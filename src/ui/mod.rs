pub mod confirm_clear;
pub mod course_table;
pub mod header_bar;
pub mod notice_bar;
pub mod search_input;
pub mod selection_table;
pub mod status_bar;
pub mod tabs;
