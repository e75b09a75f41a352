pub mod dto;

pub use dto::{AcceptedPaymentRow, ManifestRow, OperationalReport, PackageStat};
