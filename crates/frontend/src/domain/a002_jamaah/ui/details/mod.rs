//! Admin quick-edit of a booking ("Edit Record Jamaah")
//!
//! - view_model.rs: form state and the update command
//! - view.rs: modal with contact fields and status selects

mod view;
mod view_model;

pub use view::JamaahDetails;
pub use view_model::JamaahDetailsViewModel;
