//! Read-only "Jamaah Profile" modal

use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_jamaah::aggregate::JamaahId;
use leptos::prelude::*;

#[component]
pub fn JamaahProfile(
    jamaah_id: JamaahId,
    on_edit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let profile = ctx.registry.with_untracked(|r| {
        r.jamaah(jamaah_id).map(|j| {
            let package = r
                .package(j.package_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "N/A".to_string());
            let passport = if j.has_passport() {
                j.passport_number.clone().unwrap_or_default()
            } else {
                "Belum Ada".to_string()
            };
            (j.clone(), package, passport)
        })
    });

    let Some((jamaah, package, passport)) = profile else {
        return view! {
            <Modal title="Jamaah Profile" on_close=on_close>
                <div class="empty-state">"Data jamaah tidak ditemukan."</div>
            </Modal>
        }
        .into_any();
    };

    let facts = [
        ("Nama Lengkap", jamaah.full_name.clone()),
        ("Nomor Registrasi", jamaah.registration_number_display().to_string()),
        ("WhatsApp", jamaah.phone.clone()),
        ("Email", jamaah.email.clone()),
        ("Paket", package),
        ("Passport", passport),
    ];

    view! {
        <Modal title="Jamaah Profile" on_close=on_close>
            <div class="profile-grid">
                {facts.into_iter().map(|(label, value)| view! {
                    <div class="fact">
                        <p class="fact__label">{label}</p>
                        <p class="fact__value">{value}</p>
                    </div>
                }).collect_view()}
            </div>
            <div class="profile-address">
                <p class="fact__label">"Alamat Lengkap"</p>
                <p>{jamaah.address.clone()}</p>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary btn-grow" on:click=move |_| on_edit.run(())>
                    "Edit Profile"
                </button>
                <button class="btn btn-light" on:click=move |_| browser::print_page()>
                    {icon("printer")}
                    "Print Summary"
                </button>
            </div>
        </Modal>
    }
    .into_any()
}
