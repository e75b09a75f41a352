use crate::domain::a002_jamaah::aggregate::{parse_iso_date, JamaahId};
use crate::domain::common::AggregateId;
use crate::shared::money::MAX_RUPIAH;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub Uuid);

impl PaymentId {
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

impl AggregateId for PaymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Transfer Bank")]
    BankTransfer,
    #[serde(rename = "DP")]
    DownPayment,
    #[serde(rename = "Cicilan")]
    Installment,
}

impl PaymentMethod {
    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::BankTransfer,
            PaymentMethod::DownPayment,
            PaymentMethod::Installment,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Transfer Bank",
            PaymentMethod::DownPayment => "DP",
            PaymentMethod::Installment => "Cicilan",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.as_str() == s)
    }
}

/// Verification state of a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VerificationStatus {
    #[default]
    #[serde(rename = "Menunggu Verifikasi")]
    Pending,
    #[serde(rename = "Diterima")]
    Accepted,
    #[serde(rename = "Ditolak")]
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Menunggu Verifikasi",
            VerificationStatus::Accepted => "Diterima",
            VerificationStatus::Rejected => "Ditolak",
        }
    }
}

/// Admin decision on a pending payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentDecision {
    Accept,
    Reject,
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub jamaah_id: JamaahId,
    /// Whole rupiah
    pub amount: i64,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub proof_image: Option<String>,
    pub status: VerificationStatus,
    pub notes: Option<String>,
}

impl Payment {
    /// Record a payment submitted for `jamaah_id`; it waits for verification
    pub fn submit(jamaah_id: Option<JamaahId>, dto: &PaymentDto) -> Result<Self, String> {
        let jamaah_id = jamaah_id.ok_or_else(|| "Pilih jamaah terlebih dahulu".to_string())?;
        dto.validate()?;
        let date = parse_iso_date(&dto.date)
            .ok_or_else(|| "Tanggal pembayaran tidak valid".to_string())?;
        let notes = Some(dto.notes.trim().to_string()).filter(|n| !n.is_empty());

        Ok(Self {
            id: PaymentId::new_v4(),
            jamaah_id,
            amount: dto.amount,
            method: dto.method,
            date,
            proof_image: dto.proof_image.clone(),
            status: VerificationStatus::Pending,
            notes,
        })
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn verify(&mut self, decision: PaymentDecision) {
        self.status = match decision {
            PaymentDecision::Accept => VerificationStatus::Accepted,
            PaymentDecision::Reject => VerificationStatus::Rejected,
        };
    }

    pub fn is_accepted(&self) -> bool {
        self.status == VerificationStatus::Accepted
    }

    pub fn is_pending(&self) -> bool {
        self.status == VerificationStatus::Pending
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// "Input Pembayaran" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub amount: i64,
    pub method: PaymentMethod,
    /// `YYYY-MM-DD`
    pub date: String,
    pub notes: String,
    pub proof_image: Option<String>,
}

impl PaymentDto {
    /// Empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.amount <= 0 {
            return Err("Nominal pembayaran harus lebih dari 0".into());
        }
        if self.amount > MAX_RUPIAH {
            return Err("Nominal pembayaran melebihi batas maksimum".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    #[test]
    fn submitted_payment_waits_for_verification() {
        let jamaah = JamaahId::new(Uuid::from_u128(7));
        let dto = PaymentDto {
            amount: 5_000_000,
            method: PaymentMethod::Installment,
            notes: " Cicilan ke-1 ".into(),
            ..PaymentDto::new(today())
        };

        let payment = Payment::submit(Some(jamaah), &dto).unwrap();
        assert_eq!(payment.jamaah_id, jamaah);
        assert!(payment.is_pending());
        assert_eq!(payment.date, today());
        assert_eq!(payment.notes.as_deref(), Some("Cicilan ke-1"));
    }

    #[test]
    fn submit_requires_jamaah_and_positive_amount() {
        let dto = PaymentDto {
            amount: 1_000,
            ..PaymentDto::new(today())
        };
        assert_eq!(
            Payment::submit(None, &dto).unwrap_err(),
            "Pilih jamaah terlebih dahulu"
        );

        let empty = PaymentDto::new(today());
        let jamaah = JamaahId::new(Uuid::from_u128(7));
        assert!(Payment::submit(Some(jamaah), &empty).is_err());
    }

    #[test]
    fn amount_above_one_trillion_is_rejected() {
        let jamaah = JamaahId::new(Uuid::from_u128(7));
        let at_limit = PaymentDto {
            amount: MAX_RUPIAH,
            ..PaymentDto::new(today())
        };
        assert!(Payment::submit(Some(jamaah), &at_limit).is_ok());

        let huge = PaymentDto {
            amount: i64::MAX,
            ..PaymentDto::new(today())
        };
        assert_eq!(
            huge.validate().unwrap_err(),
            "Nominal pembayaran melebihi batas maksimum"
        );
        assert!(Payment::submit(Some(jamaah), &huge).is_err());
    }

    #[test]
    fn verify_moves_to_final_status() {
        let jamaah = JamaahId::new(Uuid::from_u128(7));
        let dto = PaymentDto {
            amount: 1_000,
            ..PaymentDto::new(today())
        };
        let mut payment = Payment::submit(Some(jamaah), &dto).unwrap();

        payment.verify(PaymentDecision::Reject);
        assert_eq!(payment.status, VerificationStatus::Rejected);
        payment.verify(PaymentDecision::Accept);
        assert!(payment.is_accepted());
    }

    #[test]
    fn method_labels_round_trip() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_label(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_label("Kartu Kredit"), None);
    }
}
