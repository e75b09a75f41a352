use crate::shared::date_utils;
use contracts::domain::a002_jamaah::aggregate::JamaahId;
use contracts::domain::a003_payment::aggregate::{Payment, PaymentDto};
use contracts::shared::registry::AgencyRegistry;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PaymentDetailsViewModel {
    pub form: RwSignal<PaymentDto>,
    pub error: RwSignal<Option<String>>,
    registry: RwSignal<AgencyRegistry>,
}

impl PaymentDetailsViewModel {
    pub fn new(registry: RwSignal<AgencyRegistry>) -> Self {
        Self {
            form: RwSignal::new(PaymentDto::new(date_utils::today())),
            error: RwSignal::new(None),
            registry,
        }
    }

    /// New payments wait in the verification queue
    pub fn save_command(&self, jamaah_id: Option<JamaahId>, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match Payment::submit(jamaah_id, &current) {
            Ok(payment) => {
                self.registry.update(|r| {
                    r.add_payment(payment);
                });
                self.form.set(PaymentDto::new(date_utils::today()));
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
