//! Public registration ("Pendaftaran Berkah")
//!
//! - view_model.rs: form state, simulated submit, finish command
//! - view.rs: three-section form with the package sidebar
//! - summary.rs: printable registration form shown after submit

mod summary;
mod view;
mod view_model;

pub use summary::RegistrationSummary;
pub use view::RegistrationForm;
pub use view_model::RegistrationViewModel;
