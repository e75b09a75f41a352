use super::view_model::UmrahPackageDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use contracts::domain::a001_umrah_package::aggregate::{UmrahPackageDto, UmrahPackageId};
use leptos::prelude::*;

#[component]
pub fn UmrahPackageDetails(
    /// `None` opens an empty form for a new package
    package_id: Option<UmrahPackageId>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let vm = UmrahPackageDetailsViewModel::new(ctx.registry);
    vm.load_or_reset(package_id);

    let title = if vm.is_edit_mode() {
        "Edit Paket Umrah"
    } else {
        "Tambah Paket Baru"
    };

    // Plain text inputs differ only in label and field
    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           get: fn(&UmrahPackageDto) -> String,
                           set: fn(&mut UmrahPackageDto, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="details-form form-grid">
                <div class="form-group form-group--wide">
                    <label>"Nama Paket"</label>
                    <input
                        type="text"
                        placeholder="Contoh: Umrah Syawal VIP"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Harga (IDR)"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || vm.form.get().price.to_string()
                        on:input=move |ev| {
                            let price = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                            vm.form.update(|f| f.price = price);
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Durasi (Hari)"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || vm.form.get().duration.to_string()
                        on:input=move |ev| {
                            let duration = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                            vm.form.update(|f| f.duration = duration);
                        }
                    />
                </div>

                {text_field("Maskapai", "", |f| f.airline.clone(), |f, v| f.airline = v)}
                {text_field("Keberangkatan", "Contoh: 15 Januari 2025", |f| f.departure_date.clone(), |f, v| f.departure_date = v)}
                {text_field("Hotel Madinah", "", |f| f.hotel_madinah.clone(), |f, v| f.hotel_madinah = v)}
                {text_field("Hotel Makkah", "", |f| f.hotel_makkah.clone(), |f, v| f.hotel_makkah = v)}

                <div class="form-group form-group--wide">
                    <label>"Image URL"</label>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().image
                        on:input=move |ev| vm.form.update(|f| f.image = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Sudah Termasuk (satu per baris)"</label>
                    <textarea
                        rows="5"
                        prop:value=move || vm.form.get().inclusions
                        on:input=move |ev| vm.form.update(|f| f.inclusions = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>"Belum Termasuk (satu per baris)"</label>
                    <textarea
                        rows="5"
                        prop:value=move || vm.form.get().exclusions
                        on:input=move |ev| vm.form.update(|f| f.exclusions = event_target_value(&ev))
                    ></textarea>
                </div>

                <label class="form-check form-group--wide">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().is_popular
                        on:change=move |ev| vm.form.update(|f| f.is_popular = event_target_checked(&ev))
                    />
                    "Tandai sebagai Best Seller"
                </label>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary btn-grow" on:click=move |_| vm.save_command(on_saved)>
                    {move || if vm.is_edit_mode() { "Simpan Perubahan" } else { "Terbitkan Paket" }}
                </button>
                <button class="btn btn-light" on:click=move |_| on_close.run(())>"Batal"</button>
            </div>
        </Modal>
    }
}
