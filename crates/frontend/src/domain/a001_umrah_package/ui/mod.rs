pub mod catalog;
pub mod details;
pub mod list;
pub mod preview;
