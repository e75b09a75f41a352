use contracts::domain::a001_umrah_package::aggregate::{
    UmrahPackage, UmrahPackageDto, UmrahPackageId,
};
use contracts::domain::common::AggregateId;
use contracts::shared::registry::AgencyRegistry;
use leptos::prelude::*;

/// ViewModel for the package form.
///
/// The form is the DTO itself; fields are updated with `form.update()` in the view.
#[derive(Clone, Copy)]
pub struct UmrahPackageDetailsViewModel {
    pub form: RwSignal<UmrahPackageDto>,
    pub error: RwSignal<Option<String>>,
    registry: RwSignal<AgencyRegistry>,
}

impl UmrahPackageDetailsViewModel {
    pub fn new(registry: RwSignal<AgencyRegistry>) -> Self {
        Self {
            form: RwSignal::new(UmrahPackageDto::default()),
            error: RwSignal::new(None),
            registry,
        }
    }

    /// Fill the form from an existing package, or reset it for a new one
    pub fn load_or_reset(&self, id: Option<UmrahPackageId>) {
        let dto = id
            .and_then(|id| {
                self.registry
                    .with_untracked(|r| r.package(id).map(UmrahPackageDto::from))
            })
            .unwrap_or_default();
        self.form.set(dto);
        self.error.set(None);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        match current.id.as_deref() {
            Some(raw_id) => {
                let id = match UmrahPackageId::from_string(raw_id) {
                    Ok(id) => id,
                    Err(e) => {
                        log::error!("package form carries a bad id: {}", e);
                        self.error.set(Some(e));
                        return;
                    }
                };
                let existing = self.registry.with_untracked(|r| r.package(id).cloned());
                let Some(mut package) = existing else {
                    self.error.set(Some("Paket tidak ditemukan".to_string()));
                    return;
                };
                package.update(&current);
                self.registry.update(|r| {
                    r.update_package(package);
                });
            }
            None => {
                let package = UmrahPackage::from_dto(&current);
                self.registry.update(|r| {
                    r.add_package(package);
                });
            }
        }
        on_saved.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::seed::package_id;

    #[test]
    fn saving_a_package_removed_meanwhile_reports_not_found() {
        let owner = Owner::new();
        owner.with(|| {
            let registry = RwSignal::new(AgencyRegistry::seeded());
            let vm = UmrahPackageDetailsViewModel::new(registry);
            vm.load_or_reset(Some(package_id(1)));
            assert!(vm.is_edit_mode());

            registry.update(|r| r.delete_package(package_id(1)));
            let saved = RwSignal::new(false);
            vm.save_command(Callback::new(move |_| saved.set(true)));

            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Paket tidak ditemukan")
            );
            assert!(!saved.get_untracked());
            assert_eq!(registry.with_untracked(|r| r.packages.len()), 3);
        });
    }
}
