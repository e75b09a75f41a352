use crate::shared::browser;
use crate::shared::date_utils;
use contracts::domain::a001_umrah_package::aggregate::UmrahPackageId;
use contracts::domain::a002_jamaah::aggregate::{
    generate_registration_number, DocumentKind, Jamaah, JamaahDto,
};
use contracts::shared::registry::AgencyRegistry;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Simulated network round-trip of the submit button
const SUBMIT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub form: RwSignal<JamaahDto>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
    /// Set once the form went through; switches the page to the summary
    pub submitted: RwSignal<Option<Jamaah>>,
}

impl RegistrationViewModel {
    pub fn new(package_id: Option<UmrahPackageId>) -> Self {
        Self {
            form: RwSignal::new(JamaahDto::new(package_id)),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
            submitted: RwSignal::new(None),
        }
    }

    /// Age shown in "Umur Terhitung (Otomatis)"
    pub fn age(&self) -> u32 {
        self.form.with(|f| f.age_on(date_utils::today()))
    }

    pub fn set_document(&self, kind: DocumentKind, file_name: Option<String>) {
        self.form.update(|f| f.documents.set(kind, file_name));
    }

    pub fn submit_command(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        self.error.set(None);
        self.is_submitting.set(true);

        let error = self.error;
        let is_submitting = self.is_submitting;
        let submitted = self.submitted;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;

            let registration_number = generate_registration_number();
            match current.into_jamaah(registration_number, chrono::Utc::now()) {
                Ok(jamaah) => {
                    leptos::logging::log!(
                        "✅ registration ready: {}",
                        jamaah.registration_number_display()
                    );
                    submitted.set(Some(jamaah));
                    browser::scroll_to_top(true);
                }
                Err(e) => error.set(Some(e)),
            }
            is_submitting.set(false);
        });
    }

    /// Store the submitted booking and hand control back to the page
    pub fn finish_command(&self, registry: RwSignal<AgencyRegistry>, on_done: Callback<()>) {
        let Some(jamaah) = self.submitted.get_untracked() else {
            return;
        };
        registry.update(|r| {
            r.add_jamaah(jamaah);
        });
        on_done.run(());
    }
}
