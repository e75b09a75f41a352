use crate::domain::a001_umrah_package::aggregate::UmrahPackageId;
use crate::domain::a002_jamaah::aggregate::{PaymentStatus, RegistrationStatus};
use crate::domain::a003_payment::aggregate::PaymentId;
use crate::shared::billing::BillingSummary;
use crate::shared::registry::AgencyRegistry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated figures for the "Laporan Operasional" page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalReport {
    /// Sum of accepted payments
    pub total_revenue: i64,
    /// Sum of remaining balances over all jamaah
    pub total_receivables: i64,
    pub jamaah_count: usize,
    /// One entry per package in catalogue order
    pub package_stats: Vec<PackageStat>,
    pub lunas_count: usize,
    pub outstanding_count: usize,
    pub manifest_rows: Vec<ManifestRow>,
    pub accepted_payment_rows: Vec<AcceptedPaymentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStat {
    pub package_id: UmrahPackageId,
    pub name: String,
    pub count: usize,
}

/// Row of the "Peserta" (manifest) tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRow {
    pub full_name: String,
    pub registration_number: String,
    pub package_name: String,
    /// Empty when the package was deleted
    pub departure_date: String,
    pub has_passport: bool,
    pub document_count: usize,
    pub registration_status: RegistrationStatus,
}

/// Row of the "Transaksi" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedPaymentRow {
    pub payment_id: PaymentId,
    pub jamaah_name: String,
    pub amount: i64,
    pub date: NaiveDate,
}

impl OperationalReport {
    pub fn build(registry: &AgencyRegistry) -> Self {
        let total_revenue = registry
            .payments
            .iter()
            .filter(|p| p.is_accepted())
            .fold(0i64, |acc, p| acc.saturating_add(p.amount));

        let total_receivables = registry
            .jamaah
            .iter()
            .map(|j| BillingSummary::for_jamaah(registry, j).remaining)
            .fold(0i64, i64::saturating_add);

        let package_stats = registry
            .packages
            .iter()
            .map(|pkg| PackageStat {
                package_id: pkg.id,
                name: pkg.name.clone(),
                count: registry
                    .jamaah
                    .iter()
                    .filter(|j| j.package_id == pkg.id)
                    .count(),
            })
            .collect();

        let lunas_count = registry
            .jamaah
            .iter()
            .filter(|j| j.payment_status == PaymentStatus::Paid)
            .count();

        let manifest_rows = registry
            .jamaah
            .iter()
            .map(|j| {
                let package = registry.package(j.package_id);
                ManifestRow {
                    full_name: j.full_name.clone(),
                    registration_number: j.registration_number_display().to_string(),
                    package_name: registry.package_name_for(j),
                    departure_date: package
                        .map(|p| p.departure_date.clone())
                        .unwrap_or_default(),
                    has_passport: j.has_passport(),
                    document_count: j.documents.count(),
                    registration_status: j.registration_status,
                }
            })
            .collect();

        let accepted_payment_rows = registry
            .payments
            .iter()
            .filter(|p| p.is_accepted())
            .map(|p| AcceptedPaymentRow {
                payment_id: p.id,
                jamaah_name: registry
                    .jamaah(p.jamaah_id)
                    .map(|j| j.full_name.clone())
                    .unwrap_or_else(|| "-".to_string()),
                amount: p.amount,
                date: p.date,
            })
            .collect();

        Self {
            total_revenue,
            total_receivables,
            jamaah_count: registry.jamaah.len(),
            package_stats,
            lunas_count,
            outstanding_count: registry.jamaah.len() - lunas_count,
            manifest_rows,
            accepted_payment_rows,
        }
    }

    /// Most booked package; the first one in catalogue order wins a tie
    pub fn top_package(&self) -> Option<&PackageStat> {
        self.package_stats
            .iter()
            .fold(None, |best: Option<&PackageStat>, stat| match best {
                Some(b) if b.count >= stat.count => Some(b),
                _ => Some(stat),
            })
    }

    pub fn max_package_count(&self) -> usize {
        self.package_stats.iter().map(|s| s.count).max().unwrap_or(0)
    }

    /// Bar width in percent relative to the most booked package
    pub fn bar_percent(&self, count: usize) -> f64 {
        count as f64 / self.max_package_count().max(1) as f64 * 100.0
    }

    /// Revenue plus receivables: what the agency expects to collect in total
    pub fn projected_income(&self) -> i64 {
        self.total_revenue.saturating_add(self.total_receivables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_payment::aggregate::PaymentDecision;
    use crate::shared::seed::{jamaah_id, package_id};

    #[test]
    fn seeded_report_totals() {
        let report = OperationalReport::build(&AgencyRegistry::seeded());

        assert_eq!(report.total_revenue, 80_000_000);
        assert_eq!(report.total_receivables, 18_500_000);
        assert_eq!(report.jamaah_count, 2);
        assert_eq!(report.lunas_count, 1);
        assert_eq!(report.outstanding_count, 1);
        assert_eq!(report.projected_income(), 98_500_000);
    }

    #[test]
    fn package_stats_follow_catalogue() {
        let report = OperationalReport::build(&AgencyRegistry::seeded());
        let counts: Vec<usize> = report.package_stats.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 1, 0, 0]);

        // tie between the first two packages, the first one wins
        assert_eq!(report.top_package().map(|s| s.package_id), Some(package_id(1)));
        assert_eq!(report.bar_percent(1), 100.0);
        assert_eq!(report.bar_percent(0), 0.0);
    }

    #[test]
    fn empty_registry_has_no_division_by_zero() {
        let report = OperationalReport::build(&AgencyRegistry::default());
        assert!(report.top_package().is_none());
        assert_eq!(report.bar_percent(0), 0.0);
        assert_eq!(report.total_receivables, 0);
    }

    #[test]
    fn top_package_falls_back_to_first_when_nothing_booked() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_jamaah(jamaah_id(1));
        registry.delete_jamaah(jamaah_id(2));
        let report = OperationalReport::build(&registry);

        let top = report.top_package().unwrap();
        assert_eq!(top.package_id, package_id(1));
        assert_eq!(top.count, 0);
    }

    #[test]
    fn manifest_marks_deleted_packages() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_package(package_id(2));
        let report = OperationalReport::build(&registry);

        let ahmad = &report.manifest_rows[0];
        assert_eq!(ahmad.package_name, "Paket Dihapus");
        assert_eq!(ahmad.departure_date, "");
        assert!(ahmad.has_passport);
        assert_eq!(report.package_stats.len(), 3);
    }

    #[test]
    fn accepted_rows_grow_after_verification() {
        let mut registry = AgencyRegistry::seeded();
        assert_eq!(
            OperationalReport::build(&registry).accepted_payment_rows.len(),
            2
        );

        let mut pending = registry.pending_payments().remove(0);
        pending.verify(PaymentDecision::Accept);
        registry.update_payment(pending);

        let report = OperationalReport::build(&registry);
        assert_eq!(report.accepted_payment_rows.len(), 3);
        assert_eq!(report.total_revenue, 85_000_000);
        assert_eq!(report.total_receivables, 13_500_000);
    }

    #[test]
    fn huge_accepted_amounts_do_not_overflow_totals() {
        let mut registry = AgencyRegistry::seeded();
        for _ in 0..2 {
            let mut whale = registry.payments[0].clone();
            whale.amount = i64::MAX;
            whale.verify(PaymentDecision::Accept);
            registry.add_payment(whale);
        }

        let report = OperationalReport::build(&registry);
        assert_eq!(report.total_revenue, i64::MAX);
        assert_eq!(report.projected_income(), i64::MAX.saturating_add(report.total_receivables));
    }

    #[test]
    fn receivables_drop_when_jamaah_removed() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_jamaah(jamaah_id(2));
        let report = OperationalReport::build(&registry);

        assert_eq!(report.total_receivables, 0);
        assert_eq!(report.total_revenue, 70_000_000);
        assert_eq!(report.outstanding_count, 0);
    }
}
