use crate::domain::a001_umrah_package::aggregate::UmrahPackageId;
use crate::domain::common::AggregateId;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a jamaah (pilgrim booking)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JamaahId(pub Uuid);

impl JamaahId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for JamaahId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JamaahId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Relationship to the head of the family (mahram)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Relationship {
    #[default]
    #[serde(rename = "Kepala Keluarga")]
    HeadOfFamily,
    #[serde(rename = "Istri")]
    Wife,
    #[serde(rename = "Anak Kandung")]
    Child,
    #[serde(rename = "Orang Tua")]
    Parent,
    #[serde(rename = "Saudara Kandung")]
    Sibling,
}

impl Relationship {
    pub fn all() -> [Relationship; 5] {
        [
            Relationship::HeadOfFamily,
            Relationship::Wife,
            Relationship::Child,
            Relationship::Parent,
            Relationship::Sibling,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::HeadOfFamily => "Kepala Keluarga",
            Relationship::Wife => "Istri",
            Relationship::Child => "Anak Kandung",
            Relationship::Parent => "Orang Tua",
            Relationship::Sibling => "Saudara Kandung",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PassportStatus {
    #[serde(rename = "Punya")]
    Owned,
    #[default]
    #[serde(rename = "Belum")]
    NotYet,
}

impl PassportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassportStatus::Owned => "Punya",
            PassportStatus::NotYet => "Belum",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Punya" => Some(PassportStatus::Owned),
            "Belum" => Some(PassportStatus::NotYet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Confirmed,
    Canceled,
}

impl RegistrationStatus {
    pub fn all() -> [RegistrationStatus; 3] {
        [
            RegistrationStatus::Pending,
            RegistrationStatus::Confirmed,
            RegistrationStatus::Canceled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Confirmed => "Confirmed",
            RegistrationStatus::Canceled => "Canceled",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.as_str() == s)
    }
}

/// Settlement state of the jamaah's bill, maintained by the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "Belum Lunas")]
    Unpaid,
    #[serde(rename = "DP")]
    DownPayment,
    #[serde(rename = "Lunas")]
    Paid,
}

impl PaymentStatus {
    pub fn all() -> [PaymentStatus; 3] {
        [
            PaymentStatus::Unpaid,
            PaymentStatus::DownPayment,
            PaymentStatus::Paid,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Belum Lunas",
            PaymentStatus::DownPayment => "DP",
            PaymentStatus::Paid => "Lunas",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.as_str() == s)
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Scanned documents attached at registration. Only file names are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Passport,
    Ktp,
    FamilyCard,
    BirthCertificate,
    Photo,
    MarriageBook,
}

impl DocumentKind {
    /// Documents listed in the "Dokumen" section (passport scan lives in the passport section)
    pub fn supporting() -> [DocumentKind; 5] {
        [
            DocumentKind::Ktp,
            DocumentKind::FamilyCard,
            DocumentKind::BirthCertificate,
            DocumentKind::Photo,
            DocumentKind::MarriageBook,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "Scan Paspor (Halaman Depan)",
            DocumentKind::Ktp => "KTP Asli / Scan",
            DocumentKind::FamilyCard => "Kartu Keluarga",
            DocumentKind::BirthCertificate => "Akta Lahir",
            DocumentKind::Photo => "Pas Foto 4x6 (Background Putih)",
            DocumentKind::MarriageBook => "Buku Nikah (Jika Suami Istri)",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "🛂",
            DocumentKind::Ktp => "🆔",
            DocumentKind::FamilyCard => "👨‍👩‍👧‍👦",
            DocumentKind::BirthCertificate => "🍼",
            DocumentKind::Photo => "📸",
            DocumentKind::MarriageBook => "💍",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSet {
    pub passport_scan: Option<String>,
    pub ktp_scan: Option<String>,
    pub kk_scan: Option<String>,
    pub akta_scan: Option<String>,
    pub photo_scan: Option<String>,
    pub marriage_scan: Option<String>,
}

impl DocumentSet {
    pub fn get(&self, kind: DocumentKind) -> Option<&str> {
        let slot = match kind {
            DocumentKind::Passport => &self.passport_scan,
            DocumentKind::Ktp => &self.ktp_scan,
            DocumentKind::FamilyCard => &self.kk_scan,
            DocumentKind::BirthCertificate => &self.akta_scan,
            DocumentKind::Photo => &self.photo_scan,
            DocumentKind::MarriageBook => &self.marriage_scan,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, kind: DocumentKind, file_name: Option<String>) {
        let slot = match kind {
            DocumentKind::Passport => &mut self.passport_scan,
            DocumentKind::Ktp => &mut self.ktp_scan,
            DocumentKind::FamilyCard => &mut self.kk_scan,
            DocumentKind::BirthCertificate => &mut self.akta_scan,
            DocumentKind::Photo => &mut self.photo_scan,
            DocumentKind::MarriageBook => &mut self.marriage_scan,
        };
        *slot = file_name.filter(|name| !name.trim().is_empty());
    }

    /// Number of attached documents, passport scan included
    pub fn count(&self) -> usize {
        [
            &self.passport_scan,
            &self.ktp_scan,
            &self.kk_scan,
            &self.akta_scan,
            &self.photo_scan,
            &self.marriage_scan,
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Jamaah (pilgrim) booking record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jamaah {
    pub id: JamaahId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub package_id: UmrahPackageId,
    pub number_of_persons: u32,
    pub notes: String,
    pub relationship: Relationship,
    pub place_of_birth: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: u32,
    pub address: String,
    pub passport_status: PassportStatus,
    pub passport_number: Option<String>,
    #[serde(flatten)]
    pub documents: DocumentSet,
    pub registration_number: Option<String>,
    pub registration_date: DateTime<Utc>,
    pub registration_status: RegistrationStatus,
    pub payment_status: PaymentStatus,
}

impl Jamaah {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn has_passport(&self) -> bool {
        self.passport_status == PassportStatus::Owned
    }

    /// Passport number for summaries and the printed form
    pub fn passport_display(&self) -> String {
        match (&self.passport_status, &self.passport_number) {
            (PassportStatus::Owned, Some(number)) if !number.trim().is_empty() => number.clone(),
            _ => "Masih dalam proses".to_string(),
        }
    }

    pub fn registration_number_display(&self) -> &str {
        self.registration_number.as_deref().unwrap_or("-")
    }

    /// Admin search: case-insensitive match on full name or registration number
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.full_name.to_lowercase().contains(&term)
            || self
                .registration_number
                .as_deref()
                .is_some_and(|reg| reg.to_lowercase().contains(&term))
    }

    /// Apply the admin quick-edit form
    pub fn apply_edit(&mut self, dto: &JamaahEditDto) {
        self.full_name = dto.full_name.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.registration_status = dto.registration_status;
        self.payment_status = dto.payment_status;
    }
}

// ============================================================================
// Derived values
// ============================================================================

/// Age in whole years on `today`; never negative
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// `REG-` followed by six digits in 100000..=999999
pub fn generate_registration_number() -> String {
    let n = 100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32;
    format!("REG-{}", n)
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Public registration form model.
///
/// Raw input values are kept as strings; `into_jamaah` validates and converts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JamaahDto {
    pub package_id: Option<UmrahPackageId>,
    pub number_of_persons: u32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub relationship: Relationship,
    pub place_of_birth: String,
    /// `YYYY-MM-DD` as produced by `<input type="date">`
    pub date_of_birth: String,
    pub address: String,
    pub passport_status: PassportStatus,
    pub passport_number: String,
    pub documents: DocumentSet,
}

impl JamaahDto {
    pub fn new(package_id: Option<UmrahPackageId>) -> Self {
        Self {
            package_id,
            number_of_persons: 1,
            ..Default::default()
        }
    }

    /// Auto-calculated age; 0 until a valid birth date is entered
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        parse_iso_date(&self.date_of_birth)
            .map(|birth| calculate_age(birth, today))
            .unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.package_id.is_none() {
            return Err("Silakan pilih paket Umrah".into());
        }
        if self.number_of_persons == 0 {
            return Err("Jumlah jamaah minimal 1 orang".into());
        }
        if self.full_name.trim().is_empty() {
            return Err("Nama lengkap wajib diisi".into());
        }
        if self.place_of_birth.trim().is_empty() {
            return Err("Tempat lahir wajib diisi".into());
        }
        if parse_iso_date(&self.date_of_birth).is_none() {
            return Err("Tanggal lahir wajib diisi".into());
        }
        if self.address.trim().is_empty() {
            return Err("Alamat domisili wajib diisi".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Nomor WhatsApp wajib diisi".into());
        }
        if !self.email.contains('@') {
            return Err("Alamat email tidak valid".into());
        }
        if self.passport_status == PassportStatus::Owned && self.passport_number.trim().is_empty()
        {
            return Err("Nomor paspor wajib diisi".into());
        }
        Ok(())
    }

    /// Validate and turn the form into a booking with status Pending / Belum Lunas
    pub fn into_jamaah(
        self,
        registration_number: String,
        now: DateTime<Utc>,
    ) -> Result<Jamaah, String> {
        self.validate()?;
        let package_id = self
            .package_id
            .ok_or_else(|| "Silakan pilih paket Umrah".to_string())?;
        let date_of_birth = parse_iso_date(&self.date_of_birth);
        let age = self.age_on(now.date_naive());
        let passport_number = match self.passport_status {
            PassportStatus::Owned => Some(self.passport_number.trim().to_string()),
            PassportStatus::NotYet => None,
        };
        let mut documents = self.documents;
        if self.passport_status == PassportStatus::NotYet {
            documents.set(DocumentKind::Passport, None);
        }

        Ok(Jamaah {
            id: JamaahId::new_v4(),
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            package_id,
            number_of_persons: self.number_of_persons,
            notes: self.notes.trim().to_string(),
            relationship: self.relationship,
            place_of_birth: self.place_of_birth.trim().to_string(),
            date_of_birth,
            age,
            address: self.address.trim().to_string(),
            passport_status: self.passport_status,
            passport_number,
            documents,
            registration_number: Some(registration_number),
            registration_date: now,
            registration_status: RegistrationStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
        })
    }
}

/// Admin quick-edit form (contact details and statuses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JamaahEditDto {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub registration_status: RegistrationStatus,
    pub payment_status: PaymentStatus,
}

impl JamaahEditDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Nama lengkap wajib diisi".into());
        }
        Ok(())
    }
}

impl From<&Jamaah> for JamaahEditDto {
    fn from(j: &Jamaah) -> Self {
        Self {
            id: j.id.as_string(),
            full_name: j.full_name.clone(),
            phone: j.phone.clone(),
            email: j.email.clone(),
            registration_status: j.registration_status,
            payment_status: j.payment_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_form() -> JamaahDto {
        JamaahDto {
            full_name: " Muhammad Ali ".into(),
            phone: "08123456789".into(),
            email: "ali@example.com".into(),
            place_of_birth: "Surabaya".into(),
            date_of_birth: "1990-06-15".into(),
            address: "Jl. Pahlawan 1".into(),
            ..JamaahDto::new(Some(UmrahPackageId::new(Uuid::from_u128(1))))
        }
    }

    #[test]
    fn age_counts_only_completed_years() {
        assert_eq!(calculate_age(date(1985, 5, 12), date(2024, 5, 11)), 38);
        assert_eq!(calculate_age(date(1985, 5, 12), date(2024, 5, 12)), 39);
        assert_eq!(calculate_age(date(1985, 5, 12), date(2024, 12, 1)), 39);
    }

    #[test]
    fn age_is_clamped_for_future_birth_dates() {
        assert_eq!(calculate_age(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn registration_number_has_six_digits() {
        for _ in 0..50 {
            let reg = generate_registration_number();
            let digits = reg.strip_prefix("REG-").unwrap();
            let n: u32 = digits.parse().unwrap();
            assert!((100_000..=999_999).contains(&n), "{reg}");
        }
    }

    #[test]
    fn passport_number_required_only_when_owned() {
        let mut form = filled_form();
        assert!(form.validate().is_ok());

        form.passport_status = PassportStatus::Owned;
        assert_eq!(form.validate().unwrap_err(), "Nomor paspor wajib diisi");

        form.passport_number = "A1234567".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn validation_requires_package_and_email() {
        let mut form = filled_form();
        form.package_id = None;
        assert_eq!(form.validate().unwrap_err(), "Silakan pilih paket Umrah");

        let mut form = filled_form();
        form.email = "ali.example.com".into();
        assert_eq!(form.validate().unwrap_err(), "Alamat email tidak valid");
    }

    #[test]
    fn into_jamaah_sets_defaults_and_age() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let jamaah = filled_form()
            .into_jamaah("REG-123456".into(), now)
            .unwrap();

        assert_eq!(jamaah.full_name, "Muhammad Ali");
        assert_eq!(jamaah.age, 34);
        assert_eq!(jamaah.registration_status, RegistrationStatus::Pending);
        assert_eq!(jamaah.payment_status, PaymentStatus::Unpaid);
        assert_eq!(jamaah.registration_number.as_deref(), Some("REG-123456"));
        assert_eq!(jamaah.passport_display(), "Masih dalam proses");
    }

    #[test]
    fn passport_scan_dropped_when_passport_not_owned() {
        let mut form = filled_form();
        form.documents
            .set(DocumentKind::Passport, Some("paspor.jpg".into()));
        form.documents.set(DocumentKind::Ktp, Some("ktp.png".into()));

        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let jamaah = form.into_jamaah("REG-100000".into(), now).unwrap();
        assert_eq!(jamaah.documents.get(DocumentKind::Passport), None);
        assert_eq!(jamaah.documents.count(), 1);
    }

    #[test]
    fn search_matches_name_or_registration_number() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let jamaah = filled_form()
            .into_jamaah("REG-882910".into(), now)
            .unwrap();

        assert!(jamaah.matches_search(""));
        assert!(jamaah.matches_search("ali"));
        assert!(jamaah.matches_search("reg-8829"));
        assert!(!jamaah.matches_search("siti"));
    }

    #[test]
    fn status_labels_round_trip() {
        for status in PaymentStatus::all() {
            assert_eq!(PaymentStatus::from_label(status.as_str()), Some(status));
        }
        for rel in Relationship::all() {
            assert_eq!(Relationship::from_label(rel.as_str()), Some(rel));
        }
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Unpaid).unwrap(),
            "\"Belum Lunas\""
        );
    }

    #[test]
    fn owned_passport_shows_its_number() {
        let mut form = filled_form();
        form.passport_status = PassportStatus::Owned;
        form.passport_number = "B7654321".into();

        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let jamaah = form.into_jamaah("REG-100000".into(), now).unwrap();
        assert!(jamaah.has_passport());
        assert_eq!(jamaah.passport_display(), "B7654321");
    }

    #[test]
    fn admin_edit_touches_only_contact_and_statuses() {
        let mut form = filled_form();
        form.number_of_persons = 3;
        form.documents.set(DocumentKind::Ktp, Some("ktp.png".into()));
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let mut jamaah = form.into_jamaah("REG-555555".into(), now).unwrap();
        let before = jamaah.clone();

        let edit = JamaahEditDto {
            full_name: "  Ali bin Abdullah ".into(),
            phone: " 0899 ".into(),
            email: " ali@baru.id ".into(),
            registration_status: RegistrationStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            ..JamaahEditDto::from(&jamaah)
        };
        jamaah.apply_edit(&edit);

        assert_eq!(jamaah.full_name, "Ali bin Abdullah");
        assert_eq!(jamaah.phone, "0899");
        assert_eq!(jamaah.email, "ali@baru.id");
        assert_eq!(jamaah.registration_status, RegistrationStatus::Confirmed);
        assert_eq!(jamaah.payment_status, PaymentStatus::Paid);

        assert_eq!(jamaah.id, before.id);
        assert_eq!(jamaah.package_id, before.package_id);
        assert_eq!(jamaah.number_of_persons, 3);
        assert_eq!(jamaah.documents, before.documents);
        assert_eq!(jamaah.registration_number.as_deref(), Some("REG-555555"));
        assert_eq!(jamaah.address, before.address);
    }

    #[test]
    fn empty_file_name_clears_document_slot() {
        let mut docs = DocumentSet::default();
        docs.set(DocumentKind::Photo, Some("foto.jpg".into()));
        assert_eq!(docs.get(DocumentKind::Photo), Some("foto.jpg"));
        docs.set(DocumentKind::Photo, Some("  ".into()));
        assert_eq!(docs.get(DocumentKind::Photo), None);
    }
}
