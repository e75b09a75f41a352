pub mod dashboard;
pub mod details;
