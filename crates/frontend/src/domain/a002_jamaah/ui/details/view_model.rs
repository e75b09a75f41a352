use contracts::domain::a002_jamaah::aggregate::{JamaahEditDto, JamaahId};
use contracts::domain::common::AggregateId;
use contracts::shared::registry::AgencyRegistry;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct JamaahDetailsViewModel {
    pub form: RwSignal<Option<JamaahEditDto>>,
    pub error: RwSignal<Option<String>>,
    registry: RwSignal<AgencyRegistry>,
}

impl JamaahDetailsViewModel {
    pub fn new(registry: RwSignal<AgencyRegistry>) -> Self {
        Self {
            form: RwSignal::new(None),
            error: RwSignal::new(None),
            registry,
        }
    }

    pub fn load(&self, id: JamaahId) {
        let dto = self
            .registry
            .with_untracked(|r| r.jamaah(id).map(JamaahEditDto::from));
        if dto.is_none() {
            self.error.set(Some("Data jamaah tidak ditemukan".to_string()));
        }
        self.form.set(dto);
    }

    pub fn update_form(&self, f: impl FnOnce(&mut JamaahEditDto)) {
        self.form.update(|form| {
            if let Some(form) = form.as_mut() {
                f(form);
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let Some(current) = self.form.get_untracked() else {
            return;
        };
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }
        let id = match JamaahId::from_string(&current.id) {
            Ok(id) => id,
            Err(e) => {
                log::error!("jamaah form carries a bad id: {}", e);
                self.error.set(Some(e));
                return;
            }
        };

        let existing = self.registry.with_untracked(|r| r.jamaah(id).cloned());
        let Some(mut jamaah) = existing else {
            self.error.set(Some("Data jamaah tidak ditemukan".to_string()));
            return;
        };
        jamaah.apply_edit(&current);
        self.registry.update(|r| {
            r.update_jamaah(jamaah);
        });
        on_saved.run(());
    }
}
