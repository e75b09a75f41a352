//! In-memory state container for the agency's records.
//!
//! Holds the package catalogue, jamaah bookings and payment records in
//! insertion order. Views read it through lookups and filters and mutate it
//! through the `add_*` / `update_*` / `delete_*` methods; nothing is persisted.

use crate::domain::a001_umrah_package::aggregate::{UmrahPackage, UmrahPackageId};
use crate::domain::a002_jamaah::aggregate::{Jamaah, JamaahId};
use crate::domain::a003_payment::aggregate::{Payment, PaymentId};
use crate::shared::seed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgencyRegistry {
    pub packages: Vec<UmrahPackage>,
    pub jamaah: Vec<Jamaah>,
    pub payments: Vec<Payment>,
}

impl AgencyRegistry {
    /// Registry pre-filled with the demo catalogue and bookings
    pub fn seeded() -> Self {
        Self {
            packages: seed::packages(),
            jamaah: seed::jamaah(),
            payments: seed::payments(),
        }
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn package(&self, id: UmrahPackageId) -> Option<&UmrahPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn jamaah(&self, id: JamaahId) -> Option<&Jamaah> {
        self.jamaah.iter().find(|j| j.id == id)
    }

    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Package name for a booking, "Paket Dihapus" once the package is gone
    pub fn package_name_for(&self, jamaah: &Jamaah) -> String {
        self.package(jamaah.package_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Paket Dihapus".to_string())
    }

    pub fn payments_for(&self, jamaah_id: JamaahId) -> impl Iterator<Item = &Payment> {
        self.payments
            .iter()
            .filter(move |p| p.jamaah_id == jamaah_id)
    }

    pub fn filter_jamaah(&self, term: &str) -> Vec<Jamaah> {
        self.jamaah
            .iter()
            .filter(|j| j.matches_search(term))
            .cloned()
            .collect()
    }

    pub fn pending_payments(&self) -> Vec<Payment> {
        self.payments
            .iter()
            .filter(|p| p.is_pending())
            .cloned()
            .collect()
    }

    /// Payments that already went through verification (accepted or rejected)
    pub fn settled_payments(&self) -> Vec<Payment> {
        self.payments
            .iter()
            .filter(|p| !p.is_pending())
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Jamaah
    // ------------------------------------------------------------------

    /// Append a booking under a fresh id; returns that id
    pub fn add_jamaah(&mut self, mut jamaah: Jamaah) -> JamaahId {
        jamaah.id = JamaahId::new_v4();
        let id = jamaah.id;
        log::debug!(
            "registry: add jamaah {} ({})",
            jamaah.full_name,
            jamaah.registration_number_display()
        );
        self.jamaah.push(jamaah);
        id
    }

    pub fn update_jamaah(&mut self, updated: Jamaah) -> bool {
        match self.jamaah.iter_mut().find(|j| j.id == updated.id) {
            Some(slot) => {
                log::debug!("registry: update jamaah {}", updated.full_name);
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove a booking together with all of its payments
    pub fn delete_jamaah(&mut self, id: JamaahId) {
        let before = self.payments.len();
        self.jamaah.retain(|j| j.id != id);
        self.payments.retain(|p| p.jamaah_id != id);
        log::debug!(
            "registry: delete jamaah {:?}, {} payment(s) removed",
            id,
            before - self.payments.len()
        );
    }

    // ------------------------------------------------------------------
    // Payments
    // ------------------------------------------------------------------

    pub fn add_payment(&mut self, mut payment: Payment) -> PaymentId {
        payment.id = PaymentId::new_v4();
        let id = payment.id;
        log::debug!(
            "registry: add payment {} for {:?}",
            payment.amount,
            payment.jamaah_id
        );
        self.payments.push(payment);
        id
    }

    pub fn update_payment(&mut self, updated: Payment) -> bool {
        match self.payments.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                log::debug!(
                    "registry: payment {:?} -> {}",
                    updated.id,
                    updated.status.as_str()
                );
                *slot = updated;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Packages
    // ------------------------------------------------------------------

    pub fn add_package(&mut self, mut package: UmrahPackage) -> UmrahPackageId {
        package.id = UmrahPackageId::new_v4();
        let id = package.id;
        log::debug!("registry: add package {}", package.name);
        self.packages.push(package);
        id
    }

    pub fn update_package(&mut self, updated: UmrahPackage) -> bool {
        match self.packages.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                log::debug!("registry: update package {}", updated.name);
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove a package; bookings that reference it are kept
    pub fn delete_package(&mut self, id: UmrahPackageId) {
        self.packages.retain(|p| p.id != id);
        let orphaned = self.jamaah.iter().filter(|j| j.package_id == id).count();
        if orphaned > 0 {
            log::warn!(
                "registry: package {:?} deleted while {} booking(s) still reference it",
                id,
                orphaned
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_jamaah::aggregate::{JamaahEditDto, PaymentStatus};
    use crate::domain::a003_payment::aggregate::{PaymentDecision, PaymentDto};
    use crate::shared::seed::{jamaah_id, package_id};
    use chrono::NaiveDate;

    #[test]
    fn seeded_registry_has_demo_data() {
        let registry = AgencyRegistry::seeded();
        assert_eq!(registry.packages.len(), 4);
        assert_eq!(registry.jamaah.len(), 2);
        assert_eq!(registry.payments.len(), 3);
        assert_eq!(registry.pending_payments().len(), 1);
        assert_eq!(registry.settled_payments().len(), 2);
    }

    #[test]
    fn delete_jamaah_cascades_to_payments() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_jamaah(jamaah_id(2));

        assert!(registry.jamaah(jamaah_id(2)).is_none());
        assert_eq!(registry.payments.len(), 1);
        assert!(registry.payments.iter().all(|p| p.jamaah_id == jamaah_id(1)));
    }

    #[test]
    fn add_assigns_fresh_ids() {
        let mut registry = AgencyRegistry::seeded();
        let copy = registry.jamaah[0].clone();
        let new_id = registry.add_jamaah(copy.clone());

        assert_ne!(new_id, copy.id);
        assert_eq!(registry.jamaah.len(), 3);
        assert_eq!(registry.jamaah.last().map(|j| j.id), Some(new_id));
    }

    #[test]
    fn update_replaces_by_id_and_ignores_unknown() {
        let mut registry = AgencyRegistry::seeded();
        let mut pkg = registry.packages[0].clone();
        pkg.price = 29_000_000;
        assert!(registry.update_package(pkg));
        assert_eq!(registry.package(package_id(1)).map(|p| p.price), Some(29_000_000));

        let mut stranger = registry.packages[0].clone();
        stranger.id = UmrahPackageId::new_v4();
        assert!(!registry.update_package(stranger));
        assert_eq!(registry.packages.len(), 4);
    }

    #[test]
    fn update_jamaah_applies_admin_edit_by_id() {
        let mut registry = AgencyRegistry::seeded();
        let mut siti = registry.jamaah(jamaah_id(2)).cloned().unwrap();
        let edit = JamaahEditDto {
            full_name: "Siti Aminah".into(),
            payment_status: PaymentStatus::Paid,
            ..JamaahEditDto::from(&siti)
        };
        siti.apply_edit(&edit);
        assert!(registry.update_jamaah(siti));

        let stored = registry.jamaah(jamaah_id(2)).cloned().unwrap();
        assert_eq!(stored.full_name, "Siti Aminah");
        assert_eq!(stored.payment_status, PaymentStatus::Paid);
        assert_eq!(stored.package_id, package_id(1));
        assert_eq!(stored.registration_number.as_deref(), Some("REG-129034"));
        assert_eq!(registry.jamaah.len(), 2);
    }

    #[test]
    fn update_jamaah_ignores_unknown_id() {
        let mut registry = AgencyRegistry::seeded();
        let mut stranger = registry.jamaah[0].clone();
        stranger.id = JamaahId::new_v4();
        stranger.full_name = "Orang Asing".into();

        assert!(!registry.update_jamaah(stranger));
        assert_eq!(registry.jamaah.len(), 2);
        assert!(registry.jamaah.iter().all(|j| j.full_name != "Orang Asing"));
    }

    #[test]
    fn deleted_package_keeps_bookings() {
        let mut registry = AgencyRegistry::seeded();
        registry.delete_package(package_id(2));

        assert_eq!(registry.packages.len(), 3);
        let ahmad = registry.jamaah(jamaah_id(1)).cloned();
        assert!(ahmad.is_some());
        if let Some(ahmad) = ahmad {
            assert_eq!(registry.package_name_for(&ahmad), "Paket Dihapus");
        }
    }

    #[test]
    fn verifying_pending_payment_moves_it_to_history() {
        let mut registry = AgencyRegistry::seeded();
        let mut pending = registry.pending_payments().remove(0);
        pending.verify(PaymentDecision::Accept);
        assert!(registry.update_payment(pending));

        assert!(registry.pending_payments().is_empty());
        assert_eq!(registry.settled_payments().len(), 3);
    }

    #[test]
    fn new_payment_is_pending_for_its_jamaah() {
        let mut registry = AgencyRegistry::seeded();
        let dto = PaymentDto {
            amount: 2_500_000,
            ..PaymentDto::new(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
        };
        let payment = Payment::submit(Some(jamaah_id(1)), &dto).unwrap();
        let id = registry.add_payment(payment);

        assert!(registry.payment(id).is_some_and(|p| p.is_pending()));
        assert_eq!(registry.payments_for(jamaah_id(1)).count(), 2);
    }

    #[test]
    fn filter_uses_name_or_registration_number() {
        let registry = AgencyRegistry::seeded();
        assert_eq!(registry.filter_jamaah("").len(), 2);
        assert_eq!(registry.filter_jamaah("SITI").len(), 1);
        assert_eq!(registry.filter_jamaah("882910").len(), 1);
        assert!(registry.filter_jamaah("zzz").is_empty());
    }
}
