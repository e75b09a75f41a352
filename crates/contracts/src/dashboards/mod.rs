pub mod d400_operational_reports;
