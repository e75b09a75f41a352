pub mod billing;
pub mod money;
pub mod registry;
pub mod seed;
pub mod settings;
