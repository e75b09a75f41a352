pub mod a001_umrah_package;
pub mod a002_jamaah;
pub mod a003_payment;
