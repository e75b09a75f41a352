mod dashboard;

pub use dashboard::OperationalReportsDashboard;
