use crate::domain::common::AggregateId;
use crate::shared::money::MAX_RUPIAH;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an Umrah package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UmrahPackageId(pub Uuid);

impl UmrahPackageId {
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

impl AggregateId for UmrahPackageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UmrahPackageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Umrah travel package offered by the agency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmrahPackage {
    pub id: UmrahPackageId,
    pub name: String,
    /// Price per person, whole rupiah
    pub price: i64,
    /// Trip length in days
    pub duration: u32,
    pub airline: String,
    pub hotel_madinah: String,
    pub hotel_makkah: String,
    /// Displayed as entered, e.g. "15 Oktober 2024"
    pub departure_date: String,
    pub image: String,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

impl UmrahPackage {
    /// Build a new package from the admin form
    pub fn from_dto(dto: &UmrahPackageDto) -> Self {
        let mut package = Self {
            id: UmrahPackageId::new_v4(),
            name: String::new(),
            price: 0,
            duration: 0,
            airline: String::new(),
            hotel_madinah: String::new(),
            hotel_makkah: String::new(),
            departure_date: String::new(),
            image: String::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            is_popular: false,
        };
        package.update(dto);
        package
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Overwrite the editable fields from the admin form
    pub fn update(&mut self, dto: &UmrahPackageDto) {
        self.name = dto.name.trim().to_string();
        self.price = dto.price;
        self.duration = dto.duration;
        self.airline = dto.airline.trim().to_string();
        self.hotel_madinah = dto.hotel_madinah.trim().to_string();
        self.hotel_makkah = dto.hotel_makkah.trim().to_string();
        self.departure_date = dto.departure_date.trim().to_string();
        self.image = dto.image.trim().to_string();
        self.inclusions = parse_lines(&dto.inclusions);
        self.exclusions = parse_lines(&dto.exclusions);
        self.is_popular = dto.is_popular;
    }

    pub fn validate(&self) -> Result<(), String> {
        UmrahPackageDto::from(self).validate()
    }

    /// Pre-filled WhatsApp message for the "WhatsApp" button on a package card
    pub fn whatsapp_inquiry_text(&self, agency_name: &str) -> String {
        format!(
            "Halo {}, saya tertarik dengan paket *{}* ({}). Mohon informasi pendaftarannya.",
            agency_name, self.name, self.departure_date
        )
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin form for creating / editing a package.
///
/// Inclusions and exclusions are edited as one item per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UmrahPackageDto {
    pub id: Option<String>,
    pub name: String,
    pub price: i64,
    pub duration: u32,
    pub airline: String,
    pub hotel_madinah: String,
    pub hotel_makkah: String,
    pub departure_date: String,
    pub image: String,
    pub inclusions: String,
    pub exclusions: String,
    pub is_popular: bool,
}

impl UmrahPackageDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nama paket wajib diisi".into());
        }
        if self.price <= 0 {
            return Err("Harga paket harus lebih dari 0".into());
        }
        if self.price > MAX_RUPIAH {
            return Err("Harga paket melebihi batas maksimum".into());
        }
        if self.duration == 0 {
            return Err("Durasi paket minimal 1 hari".into());
        }
        Ok(())
    }
}

impl From<&UmrahPackage> for UmrahPackageDto {
    fn from(p: &UmrahPackage) -> Self {
        Self {
            id: Some(p.id.as_string()),
            name: p.name.clone(),
            price: p.price,
            duration: p.duration,
            airline: p.airline.clone(),
            hotel_madinah: p.hotel_madinah.clone(),
            hotel_makkah: p.hotel_makkah.clone(),
            departure_date: p.departure_date.clone(),
            image: p.image.clone(),
            inclusions: join_lines(&p.inclusions),
            exclusions: join_lines(&p.exclusions),
            is_popular: p.is_popular,
        }
    }
}

/// Split a textarea value into trimmed, non-empty items
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> UmrahPackageDto {
        UmrahPackageDto {
            name: "  Umrah Syawal  ".into(),
            price: 30_000_000,
            duration: 9,
            airline: "Garuda Indonesia".into(),
            departure_date: "01 April 2025".into(),
            inclusions: "Tiket PP\n\n  Visa Umrah \n".into(),
            exclusions: "Paspor".into(),
            ..Default::default()
        }
    }

    #[test]
    fn from_dto_trims_and_splits_lists() {
        let pkg = UmrahPackage::from_dto(&sample_dto());
        assert_eq!(pkg.name, "Umrah Syawal");
        assert_eq!(pkg.inclusions, vec!["Tiket PP", "Visa Umrah"]);
        assert_eq!(pkg.exclusions, vec!["Paspor"]);
        assert!(pkg.validate().is_ok());
    }

    #[test]
    fn dto_round_trip_keeps_id_and_lines() {
        let pkg = UmrahPackage::from_dto(&sample_dto());
        let dto = UmrahPackageDto::from(&pkg);
        assert!(dto.is_edit_mode());
        assert_eq!(dto.id.as_deref(), Some(pkg.to_string_id().as_str()));
        assert_eq!(dto.inclusions, "Tiket PP\nVisa Umrah");
    }

    #[test]
    fn validation_rejects_missing_name_price_and_duration() {
        let mut dto = sample_dto();
        dto.name = "   ".into();
        assert_eq!(dto.validate().unwrap_err(), "Nama paket wajib diisi");

        let mut dto = sample_dto();
        dto.price = 0;
        assert!(dto.validate().is_err());

        let mut dto = sample_dto();
        dto.duration = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn price_above_one_trillion_is_rejected() {
        let mut dto = sample_dto();
        dto.price = MAX_RUPIAH;
        assert!(dto.validate().is_ok());

        dto.price = MAX_RUPIAH + 1;
        assert_eq!(dto.validate().unwrap_err(), "Harga paket melebihi batas maksimum");

        dto.price = i64::MAX;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn whatsapp_text_mentions_package_and_departure() {
        let pkg = UmrahPackage::from_dto(&sample_dto());
        let text = pkg.whatsapp_inquiry_text("Ar-Rayan Travel");
        assert_eq!(
            text,
            "Halo Ar-Rayan Travel, saya tertarik dengan paket *Umrah Syawal* (01 April 2025). Mohon informasi pendaftarannya."
        );
    }
}
