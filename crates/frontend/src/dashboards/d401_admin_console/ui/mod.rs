mod dashboard;
mod settings_tab;

pub use dashboard::AdminConsoleDashboard;
