use super::summary::RegistrationSummary;
use super::view_model::RegistrationViewModel;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::browser;
use crate::shared::icons::icon;
use contracts::domain::a001_umrah_package::aggregate::UmrahPackageId;
use contracts::domain::a002_jamaah::aggregate::{
    DocumentKind, JamaahDto, PassportStatus, Relationship,
};
use contracts::domain::common::AggregateId;
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;
use thaw::*;

const STEPS: [&str; 3] = ["Data Pribadi", "Data Paspor", "Dokumen"];

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let initial_package = ctx
        .booking_package
        .get_untracked()
        .or_else(|| ctx.registry.with_untracked(|r| r.packages.first().map(|p| p.id)));
    let vm = RegistrationViewModel::new(initial_package);

    let on_done = Callback::new(move |_| ctx.navigate(Page::Home));

    move || match vm.submitted.get() {
        Some(jamaah) => view! {
            <RegistrationSummary
                jamaah=jamaah
                on_finish=Callback::new(move |_| vm.finish_command(ctx.registry, on_done))
            />
        }
        .into_any(),
        None => view! { <RegistrationFormBody vm=vm /> }.into_any(),
    }
}

#[component]
fn RegistrationFormBody(vm: RegistrationViewModel) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let selected_package = move || {
        let id = vm.form.with(|f| f.package_id)?;
        ctx.registry.with(|r| r.package(id).cloned())
    };

    // Radio group value (for thaw RadioGroup API)
    let passport_value = RwSignal::new(
        vm.form
            .with_untracked(|f| f.passport_status.as_str().to_string()),
    );
    Effect::new(move |prev: Option<String>| {
        let current = passport_value.get();
        if prev.is_some() {
            if let Some(status) = PassportStatus::from_label(&current) {
                vm.form.update(|f| f.passport_status = status);
            }
        }
        current
    });
    let has_passport = move || vm.form.with(|f| f.passport_status == PassportStatus::Owned);

    let text_input = move |label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str,
                           get: fn(&JamaahDto) -> String,
                           set: fn(&mut JamaahDto, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="container registration">
            <div class="registration__intro">
                <h1>"Pendaftaran Berkah"</h1>
                <p>"Langkah awal perjalanan spiritual Anda menuju Baitullah."</p>
            </div>

            <div class="registration__card">
                <aside class="registration__sidebar">
                    <h3>"Alur Pendaftaran"</h3>
                    <ol class="registration__steps">
                        {STEPS.into_iter().enumerate().map(|(i, step)| {
                            let class = if i == 0 { "step step--active" } else { "step" };
                            view! {
                                <li class=class>
                                    <span class="step__number">{i + 1}</span>
                                    <span class="step__label">{step}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ol>

                    <div class="registration__package">
                        <p class="registration__package-label">"Paket Anda"</p>
                        {move || selected_package().map(|pkg| view! {
                            <h4>{pkg.name.clone()}</h4>
                            <p>{format!("Harga mulai {}", format_rupiah(pkg.price))}</p>
                        })}
                    </div>
                </aside>

                <div class="registration__content">
                    <section class="form-section">
                        <h3 class="form-section__title">"🕋 Informasi Identitas Jama'ah"</h3>
                        <div class="form-grid">
                            <div class="form-group">
                                <label>"Pilih Paket"</label>
                                <select
                                    on:change=move |ev| {
                                        let package_id = UmrahPackageId::from_string(&event_target_value(&ev)).ok();
                                        vm.form.update(|f| f.package_id = package_id);
                                    }
                                >
                                    {move || ctx.packages().into_iter().map(|pkg| {
                                        let id = pkg.id;
                                        view! {
                                            <option
                                                value=pkg.to_string_id()
                                                selected=move || vm.form.with(|f| f.package_id == Some(id))
                                            >
                                                {pkg.name.clone()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Jumlah Jama'ah"</label>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || vm.form.with(|f| f.number_of_persons.to_string())
                                    on:input=move |ev| {
                                        let persons = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                                        vm.form.update(|f| f.number_of_persons = persons);
                                    }
                                />
                            </div>

                            <div class="form-group form-group--wide">
                                <label>"Nama Lengkap Sesuai Paspor"</label>
                                <input
                                    type="text"
                                    placeholder="Contoh: Muhammad Ali"
                                    prop:value=move || vm.form.with(|f| f.full_name.clone())
                                    on:input=move |ev| vm.form.update(|f| f.full_name = event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label>"Hubungan / Status"</label>
                                <select
                                    on:change=move |ev| {
                                        if let Some(rel) = Relationship::from_label(&event_target_value(&ev)) {
                                            vm.form.update(|f| f.relationship = rel);
                                        }
                                    }
                                >
                                    {Relationship::all().into_iter().map(|rel| view! {
                                        <option
                                            value=rel.as_str()
                                            selected=move || vm.form.with(|f| f.relationship == rel)
                                        >
                                            {rel.as_str()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </div>

                            {text_input("Tempat Lahir", "text", "Kota Kelahiran", |f| f.place_of_birth.clone(), |f, v| f.place_of_birth = v)}
                            {text_input("Tanggal Lahir", "date", "", |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}

                            <div class="form-group">
                                <label>"Umur Terhitung (Otomatis)"</label>
                                <div class="form-readonly">{move || format!("{} Tahun", vm.age())}</div>
                            </div>

                            <div class="form-group form-group--wide">
                                <label>"Alamat Domisili Lengkap"</label>
                                <textarea
                                    rows="3"
                                    prop:value=move || vm.form.with(|f| f.address.clone())
                                    on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                                ></textarea>
                            </div>

                            {text_input("Nomor WhatsApp Aktif", "tel", "08123xxxx", |f| f.phone.clone(), |f, v| f.phone = v)}
                            {text_input("Alamat Email", "email", "anda@email.com", |f| f.email.clone(), |f, v| f.email = v)}
                        </div>
                    </section>

                    <section class="form-section form-section--tinted">
                        <h3 class="form-section__title">"🛂 Status Paspor"</h3>
                        <RadioGroup value=passport_value>
                            <Radio value=PassportStatus::Owned.as_str() label="Sudah Ada"/>
                            <Radio value=PassportStatus::NotYet.as_str() label="Belum Ada / Proses"/>
                        </RadioGroup>

                        <Show when=has_passport>
                            <div class="form-group">
                                <label>"Nomor Paspor"</label>
                                <input
                                    type="text"
                                    placeholder="Contoh: A 1234567"
                                    prop:value=move || vm.form.with(|f| f.passport_number.clone())
                                    on:input=move |ev| vm.form.update(|f| f.passport_number = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Unggah Scan Paspor (Halaman Depan)"</label>
                                <label class="dropzone">
                                    <input
                                        type="file"
                                        on:change=move |ev| vm.set_document(DocumentKind::Passport, browser::selected_file_name(&ev))
                                    />
                                    {icon("upload")}
                                    <span>
                                        {move || vm.form.with(|f| {
                                            f.documents
                                                .get(DocumentKind::Passport)
                                                .unwrap_or("Klik atau Seret File Disini")
                                                .to_string()
                                        })}
                                    </span>
                                </label>
                            </div>
                        </Show>
                    </section>

                    <section class="form-section">
                        <h3 class="form-section__title">"📂 Kelengkapan Dokumen"</h3>
                        <div class="document-grid">
                            {DocumentKind::supporting().into_iter().map(|kind| view! {
                                <div class="document-tile">
                                    <div class="document-tile__header">
                                        <span>{kind.icon()}</span>
                                        <label>{kind.label()}</label>
                                    </div>
                                    <label class="document-tile__picker">
                                        <input
                                            type="file"
                                            on:change=move |ev| vm.set_document(kind, browser::selected_file_name(&ev))
                                        />
                                        {move || vm.form.with(|f| {
                                            f.documents
                                                .get(kind)
                                                .unwrap_or("Pilih File JPG/PNG/PDF")
                                                .to_string()
                                        })}
                                    </label>
                                </div>
                            }).collect_view()}
                        </div>
                    </section>

                    {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

                    <div class="registration__submit">
                        <button
                            class="btn btn-dark btn-block btn-lg"
                            disabled=move || vm.is_submitting.get()
                            on:click=move |_| vm.submit_command()
                        >
                            {move || if vm.is_submitting.get() {
                                view! { <Spinner size=SpinnerSize::Tiny/> "Sedang Mengirim Data..." }.into_any()
                            } else {
                                view! { "Simpan & Lihat Ringkasan" {icon("arrow-right")} }.into_any()
                            }}
                        </button>
                        <p class="registration__note">
                            {move || format!(
                                "Data yang Anda kirimkan terproteksi oleh enkripsi SSL {}.",
                                ctx.agency_name()
                            )}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
