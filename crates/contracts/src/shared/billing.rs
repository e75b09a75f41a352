//! Per-jamaah billing: price × persons against accepted payments

use crate::domain::a002_jamaah::aggregate::Jamaah;
use crate::shared::registry::AgencyRegistry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    /// Package price × number of persons (0 when the package no longer exists)
    pub total_bill: i64,
    /// Sum of accepted ("Diterima") payments only
    pub total_paid: i64,
    /// `total_bill - total_paid`; negative on overpayment
    pub remaining: i64,
}

impl BillingSummary {
    pub fn for_jamaah(registry: &AgencyRegistry, jamaah: &Jamaah) -> Self {
        let total_bill = registry
            .package(jamaah.package_id)
            .map(|pkg| pkg.price.saturating_mul(i64::from(jamaah.number_of_persons)))
            .unwrap_or(0);
        let total_paid = registry
            .payments_for(jamaah.id)
            .filter(|p| p.is_accepted())
            .fold(0i64, |acc, p| acc.saturating_add(p.amount));

        Self {
            total_bill,
            total_paid,
            remaining: total_bill.saturating_sub(total_paid),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.total_bill > 0 && self.remaining <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_payment::aggregate::{Payment, PaymentDecision, PaymentDto};
    use crate::shared::seed::{jamaah_id, package_id};
    use chrono::NaiveDate;

    fn bill(registry: &AgencyRegistry, n: u128) -> BillingSummary {
        let jamaah = registry.jamaah(jamaah_id(n)).cloned().unwrap();
        BillingSummary::for_jamaah(registry, &jamaah)
    }

    #[test]
    fn vip_booking_for_two_is_fully_paid() {
        let registry = AgencyRegistry::seeded();
        let summary = bill(&registry, 1);
        assert_eq!(summary.total_bill, 70_000_000);
        assert_eq!(summary.total_paid, 70_000_000);
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_settled());
    }

    #[test]
    fn pending_payments_do_not_count() {
        let registry = AgencyRegistry::seeded();
        let summary = bill(&registry, 2);
        assert_eq!(summary.total_bill, 28_500_000);
        assert_eq!(summary.total_paid, 10_000_000);
        assert_eq!(summary.remaining, 18_500_000);
    }

    #[test]
    fn rejected_payments_do_not_count() {
        let mut registry = AgencyRegistry::seeded();
        let mut pending = registry.pending_payments().remove(0);
        pending.verify(PaymentDecision::Reject);
        registry.update_payment(pending);

        assert_eq!(bill(&registry, 2).total_paid, 10_000_000);
    }

    #[test]
    fn accepted_installment_reduces_remaining() {
        let mut registry = AgencyRegistry::seeded();
        let mut pending = registry.pending_payments().remove(0);
        pending.verify(PaymentDecision::Accept);
        registry.update_payment(pending);

        assert_eq!(bill(&registry, 2).remaining, 13_500_000);
    }

    #[test]
    fn missing_package_yields_zero_bill() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_package(package_id(1));

        let summary = bill(&registry, 2);
        assert_eq!(summary.total_bill, 0);
        assert_eq!(summary.remaining, -10_000_000);
        assert!(!summary.is_settled());
    }

    #[test]
    fn oversized_records_saturate_instead_of_overflowing() {
        let mut registry = AgencyRegistry::seeded();
        // records pushed directly bypass form validation
        let mut whale = registry.payments[0].clone();
        whale.amount = i64::MAX;
        whale.verify(PaymentDecision::Accept);
        registry.add_payment(whale);
        if let Some(pkg) = registry.packages.iter_mut().find(|p| p.id == package_id(2)) {
            pkg.price = i64::MAX;
        }

        let summary = bill(&registry, 1);
        assert_eq!(summary.total_paid, i64::MAX);
        assert_eq!(summary.total_bill, i64::MAX);
        assert_eq!(summary.remaining, 0);
    }

    #[test]
    fn overpayment_goes_negative() {
        let mut registry = AgencyRegistry::seeded();
        let dto = PaymentDto {
            amount: 1_000_000,
            ..PaymentDto::new(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
        };
        let mut extra = Payment::submit(Some(jamaah_id(1)), &dto).unwrap();
        extra.verify(PaymentDecision::Accept);
        registry.add_payment(extra);

        assert_eq!(bill(&registry, 1).remaining, -1_000_000);
    }
}
