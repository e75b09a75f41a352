//! Demo catalogue and bookings loaded on start-up

use crate::domain::a001_umrah_package::aggregate::{UmrahPackage, UmrahPackageId};
use crate::domain::a002_jamaah::aggregate::{
    DocumentSet, Jamaah, JamaahId, PassportStatus, PaymentStatus, RegistrationStatus,
    Relationship,
};
use crate::domain::a003_payment::aggregate::{
    Payment, PaymentId, PaymentMethod, VerificationStatus,
};
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

pub fn package_id(n: u128) -> UmrahPackageId {
    UmrahPackageId::new(Uuid::from_u128(0x0a01_0000 + n))
}

pub fn jamaah_id(n: u128) -> JamaahId {
    JamaahId::new(Uuid::from_u128(0x0a02_0000 + n))
}

fn payment_id(n: u128) -> PaymentId {
    PaymentId::new(Uuid::from_u128(0x0a03_0000 + n))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn packages() -> Vec<UmrahPackage> {
    vec![
        UmrahPackage {
            id: package_id(1),
            name: "Umrah Reguler Ekonomi".into(),
            price: 28_500_000,
            duration: 9,
            airline: "Saudi Arabian Airlines".into(),
            hotel_madinah: "Dyar Al Taqwa (⭐⭐⭐⭐)".into(),
            hotel_makkah: "Rayyana Ajyad (⭐⭐⭐⭐)".into(),
            departure_date: "15 Oktober 2024".into(),
            image: "https://images.unsplash.com/photo-1591604129939-f1efa4d9f7fa?auto=format&fit=crop&w=800&q=80".into(),
            inclusions: strings(&[
                "Tiket Pesawat PP",
                "Visa Umrah",
                "Makan 3x Sehari",
                "Handling & Perlengkapan",
                "Ziarah Makkah & Madinah",
            ]),
            exclusions: strings(&["Paspor", "Vaksin Meningitis", "Kebutuhan Pribadi", "Kelebihan Bagasi"]),
            is_popular: false,
        },
        UmrahPackage {
            id: package_id(2),
            name: "Umrah Exclusive VIP".into(),
            price: 35_000_000,
            duration: 12,
            airline: "Garuda Indonesia".into(),
            hotel_madinah: "Al Haram Hotel (⭐⭐⭐⭐⭐)".into(),
            hotel_makkah: "Pullman Zamzam (⭐⭐⭐⭐⭐)".into(),
            departure_date: "20 November 2024".into(),
            image: "https://images.unsplash.com/photo-1542834759-409df871638f?auto=format&fit=crop&w=800&q=80".into(),
            inclusions: strings(&[
                "Tiket Pesawat PP Executive",
                "Visa Umrah Fast Track",
                "Full Board Hotel 5*",
                "Handling VIP",
                "Kereta Cepat Madinah-Makkah",
            ]),
            exclusions: strings(&["Paspor", "Kebutuhan Pribadi", "Loundry"]),
            is_popular: true,
        },
        UmrahPackage {
            id: package_id(3),
            name: "Umrah Plus Turki".into(),
            price: 42_000_000,
            duration: 14,
            airline: "Turkish Airlines".into(),
            hotel_madinah: "Frontel Al Harithia (⭐⭐⭐⭐⭐)".into(),
            hotel_makkah: "Hilton Convention (⭐⭐⭐⭐⭐)".into(),
            departure_date: "05 Desember 2024".into(),
            image: "https://images.unsplash.com/photo-1565552645632-d7c5f76a16be?auto=format&fit=crop&w=800&q=80".into(),
            inclusions: strings(&[
                "Tiket Pesawat PP",
                "Visa Umrah & Turki",
                "City Tour Istanbul",
                "Makan 3x Sehari",
                "Bimbingan Manasik",
            ]),
            exclusions: strings(&["Paspor", "Tips Tour Guide Turki", "Pengeluaran Pribadi"]),
            is_popular: false,
        },
        UmrahPackage {
            id: package_id(4),
            name: "Umrah Ramadhan Awal".into(),
            price: 32_000_000,
            duration: 10,
            airline: "Etihad Airways".into(),
            hotel_madinah: "Nawazi Madinah (⭐⭐⭐⭐)".into(),
            hotel_makkah: "Anjum Hotel (⭐⭐⭐⭐⭐)".into(),
            departure_date: "12 Maret 2025".into(),
            image: "https://images.unsplash.com/photo-1564769662533-4f00a87b4056?auto=format&fit=crop&w=800&q=80".into(),
            inclusions: strings(&[
                "Tiket Pesawat PP",
                "Visa Umrah",
                "Saur & Buka Puasa",
                "Mutawif Berpengalaman",
            ]),
            exclusions: strings(&["Paspor", "Vaksin", "Laundry"]),
            is_popular: false,
        },
    ]
}

pub fn jamaah() -> Vec<Jamaah> {
    vec![
        Jamaah {
            id: jamaah_id(1),
            full_name: "Ahmad Faisal".into(),
            phone: "081234567890".into(),
            email: "ahmad@example.com".into(),
            package_id: package_id(2),
            number_of_persons: 2,
            notes: "Mohon kursi roda".into(),
            relationship: Relationship::HeadOfFamily,
            place_of_birth: "Jakarta".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 5, 12),
            age: 39,
            address: "Jl. Melati No. 45, Jakarta".into(),
            passport_status: PassportStatus::Owned,
            passport_number: Some("A1234567".into()),
            documents: DocumentSet::default(),
            registration_number: Some("REG-882910".into()),
            registration_date: Utc
                .with_ymd_and_hms(2024, 8, 15, 10, 0, 0)
                .single()
                .unwrap_or_default(),
            registration_status: RegistrationStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
        },
        Jamaah {
            id: jamaah_id(2),
            full_name: "Siti Aminah".into(),
            phone: "081987654321".into(),
            email: "siti@example.com".into(),
            package_id: package_id(1),
            number_of_persons: 1,
            notes: String::new(),
            relationship: Relationship::Wife,
            place_of_birth: "Bandung".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 8, 22),
            age: 36,
            address: "Jl. Dago No. 12, Bandung".into(),
            passport_status: PassportStatus::NotYet,
            passport_number: None,
            documents: DocumentSet::default(),
            registration_number: Some("REG-129034".into()),
            registration_date: Utc
                .with_ymd_and_hms(2024, 9, 1, 14, 30, 0)
                .single()
                .unwrap_or_default(),
            registration_status: RegistrationStatus::Pending,
            payment_status: PaymentStatus::DownPayment,
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    let date = |m: u32, d: u32| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
    vec![
        Payment {
            id: payment_id(1),
            jamaah_id: jamaah_id(1),
            amount: 70_000_000,
            method: PaymentMethod::BankTransfer,
            date: date(9, 1),
            proof_image: None,
            status: VerificationStatus::Accepted,
            notes: Some("Pelunasan Umrah VIP".into()),
        },
        Payment {
            id: payment_id(2),
            jamaah_id: jamaah_id(2),
            amount: 10_000_000,
            method: PaymentMethod::DownPayment,
            date: date(9, 5),
            proof_image: None,
            status: VerificationStatus::Accepted,
            notes: Some("DP Pendaftaran".into()),
        },
        Payment {
            id: payment_id(3),
            jamaah_id: jamaah_id(2),
            amount: 5_000_000,
            method: PaymentMethod::Installment,
            date: date(9, 15),
            proof_image: None,
            status: VerificationStatus::Pending,
            notes: Some("Cicilan ke-1".into()),
        },
    ]
}
