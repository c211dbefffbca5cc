pub mod catalog;
pub mod export;
pub mod offering;
pub mod selection;
