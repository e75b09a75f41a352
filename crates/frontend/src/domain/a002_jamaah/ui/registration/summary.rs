use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::date_utils::{format_date_long, format_naive_date, today};
use crate::shared::icons::icon;
use contracts::domain::a002_jamaah::aggregate::Jamaah;
use leptos::prelude::*;

/// Printable registration form ("Formulir Pendaftaran Jama'ah")
#[component]
pub fn RegistrationSummary(jamaah: Jamaah, on_finish: Callback<()>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let settings = ctx.settings.get_untracked();
    let (package_name, departure) = ctx.registry.with_untracked(|r| {
        r.package(jamaah.package_id)
            .map(|p| (p.name.clone(), p.departure_date.clone()))
            .unwrap_or_else(|| ("Paket Dihapus".to_string(), "-".to_string()))
    });
    let birth_date = jamaah
        .date_of_birth
        .map(format_naive_date)
        .unwrap_or_else(|| "-".to_string());

    let row = |label: &'static str, value: String| {
        view! {
            <div class="summary-row">
                <span class="summary-row__label">{label}</span>
                <span class="summary-row__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="container summary">
            <div class="summary__sheet print-area">
                <div class="summary__letterhead">
                    <div class="summary__brand">
                        <div class="summary__logo">"A"</div>
                        <div>
                            <h2>{settings.agency_name.clone()}</h2>
                            <p>{format!("Izin Kemenag PPIU {}", settings.license_number)}</p>
                        </div>
                    </div>
                    <div class="summary__meta">
                        <div class="summary__regno">
                            {format!("NOMOR REGISTRASI: {}", jamaah.registration_number_display())}
                        </div>
                        <p>{format!("Dicetak pada: {}", format_date_long(today()))}</p>
                    </div>
                </div>

                <h3 class="summary__title">"Formulir Pendaftaran Jama'ah"</h3>

                <div class="summary__sections">
                    <section class="summary-section">
                        <h4>"I. Paket Perjalanan"</h4>
                        {row("Nama Paket:", package_name)}
                        {row("Estimasi Berangkat:", departure)}
                        {row("Jumlah Jama'ah:", format!("{} Orang", jamaah.number_of_persons))}
                    </section>

                    <section class="summary-section">
                        <h4>"II. Identitas Diri"</h4>
                        {row("Nama Lengkap:", jamaah.full_name.clone())}
                        {row(
                            "TTL / Umur:",
                            format!("{}, {} / {} Thn", jamaah.place_of_birth, birth_date, jamaah.age),
                        )}
                        {row("Hubungan (Mahram):", jamaah.relationship.as_str().to_string())}
                    </section>

                    <section class="summary-section summary-section--wide">
                        <h4>"III. Kontak & Dokumen"</h4>
                        {row("Nomor WhatsApp:", jamaah.phone.clone())}
                        {row("Email:", jamaah.email.clone())}
                        {row("No. Paspor:", jamaah.passport_display())}
                        {row("Dokumen Terlampir:", format!("{} berkas", jamaah.documents.count()))}
                        {row("Alamat Domisili:", jamaah.address.clone())}
                    </section>
                </div>

                <div class="summary__signatures">
                    <div class="signature">
                        <p class="signature__role">"Petugas Pendaftaran"</p>
                        <div class="signature__line"></div>
                        <p class="signature__name">{format!("{} Admin", settings.agency_name)}</p>
                    </div>
                    <div class="signature">
                        <p class="signature__role">"Jama'ah Ybs"</p>
                        <div class="signature__line"></div>
                        <p class="signature__name">{jamaah.full_name.clone()}</p>
                    </div>
                </div>

                <div class="summary__actions no-print">
                    <button class="btn btn-dark btn-grow" on:click=move |_| browser::print_page()>
                        {icon("printer")}
                        "Cetak & Simpan Formulir"
                    </button>
                    <button class="btn btn-accent" on:click=move |_| on_finish.run(())>
                        "Selesai & Ke Beranda"
                    </button>
                </div>
            </div>
        </div>
    }
}
