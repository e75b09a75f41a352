//! "Pencatatan Bayar": record a payment for the selected jamaah

mod view;
mod view_model;

pub use view::PaymentDetails;
pub use view_model::PaymentDetailsViewModel;
