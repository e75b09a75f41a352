pub mod details;
pub mod list;
pub mod profile;
pub mod registration;
