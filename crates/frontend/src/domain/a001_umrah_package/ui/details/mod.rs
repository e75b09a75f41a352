//! Admin form for adding and editing a package
//!
//! - view_model.rs: form state and the save command
//! - view.rs: modal with the form fields

mod view;
mod view_model;

pub use view::UmrahPackageDetails;
pub use view_model::UmrahPackageDetailsViewModel;
