pub mod page_header;
pub mod stat_card;

pub use page_header::PageHeader;
pub use stat_card::{StatCard, StatTone};
