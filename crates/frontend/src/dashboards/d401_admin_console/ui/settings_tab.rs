use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::settings::SystemSettings;
use leptos::prelude::*;
use thaw::*;

/// "Travel Configuration": edits a draft and commits it on save
#[component]
pub fn SettingsTab() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let draft = RwSignal::new(ctx.settings.get_untracked());
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let save = move || {
        let current = draft.get_untracked();
        match current.validate() {
            Ok(()) => {
                log::info!("settings saved for {}", current.agency_name);
                ctx.settings.set(current);
                error.set(None);
                saved.set(true);
            }
            Err(e) => {
                error.set(Some(e));
                saved.set(false);
            }
        }
    };

    let text_field = move |label: &'static str,
                           input_type: &'static str,
                           get: fn(&SystemSettings) -> String,
                           set: fn(&mut SystemSettings, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=input_type
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        saved.set(false);
                        draft.update(|s| set(s, event_target_value(&ev)));
                    }
                />
            </div>
        }
    };

    view! {
        <section class="panel settings-panel">
            <h3 class="panel__title">"Travel Configuration"</h3>

            {move || error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
            {move || saved.get().then(|| view! {
                <div class="info-box text-success">{icon("check-circle")}" Pengaturan berhasil disimpan."</div>
            })}

            <div class="form-grid">
                {text_field("Nama Travel Agency", "text", |s| s.agency_name.clone(), |s, v| s.agency_name = v)}
                {text_field("Izin Kemenag (PPIU)", "text", |s| s.license_number.clone(), |s, v| s.license_number = v)}
                {text_field("Email Support", "email", |s| s.support_email.clone(), |s, v| s.support_email = v)}
                {text_field("WhatsApp Hotline", "tel", |s| s.whatsapp_hotline.clone(), |s, v| s.whatsapp_hotline = v)}
            </div>
            {text_field("Alamat Kantor", "text", |s| s.address.clone(), |s, v| s.address = v)}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                    "Simpan Pengaturan"
                </Button>
            </div>
        </section>
    }
}
