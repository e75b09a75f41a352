//! Public landing pages

mod home;
mod packages;

pub use home::HomePage;
pub use packages::PackagesPage;
