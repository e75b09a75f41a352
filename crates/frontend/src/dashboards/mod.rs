pub mod d400_operational_reports;
pub mod d401_admin_console;

pub use d400_operational_reports::ui::OperationalReportsDashboard;
pub use d401_admin_console::ui::AdminConsoleDashboard;
