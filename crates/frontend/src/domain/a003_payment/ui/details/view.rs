use super::view_model::PaymentDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_jamaah::aggregate::JamaahId;
use contracts::domain::a003_payment::aggregate::PaymentMethod;
use leptos::prelude::*;

#[component]
pub fn PaymentDetails(
    jamaah_id: JamaahId,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let vm = PaymentDetailsViewModel::new(ctx.registry);

    view! {
        <Modal title="Pencatatan Bayar" on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label>"Nominal Pembayaran (IDR)"</label>
                    <input
                        type="number"
                        min="0"
                        class="input-lg"
                        prop:value=move || vm.form.with(|f| f.amount.to_string())
                        on:input=move |ev| {
                            let amount = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                            vm.form.update(|f| f.amount = amount);
                        }
                    />
                </div>

                <div class="form-grid">
                    <div class="form-group">
                        <label>"Metode"</label>
                        <select on:change=move |ev| {
                            if let Some(method) = PaymentMethod::from_label(&event_target_value(&ev)) {
                                vm.form.update(|f| f.method = method);
                            }
                        }>
                            {PaymentMethod::all().into_iter().map(|m| view! {
                                <option value=m.as_str() selected=move || vm.form.with(|f| f.method == m)>
                                    {m.as_str()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Tanggal"</label>
                        <input
                            type="date"
                            prop:value=move || vm.form.with(|f| f.date.clone())
                            on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>"Catatan Tambahan"</label>
                    <input
                        type="text"
                        placeholder="Misal: Cicilan ke-2"
                        prop:value=move || vm.form.with(|f| f.notes.clone())
                        on:input=move |ev| vm.form.update(|f| f.notes = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Bukti Transfer (JPG/PNG)"</label>
                    <label class="dropzone">
                        <input
                            type="file"
                            accept="image/png,image/jpeg"
                            on:change=move |ev| {
                                let file_name = browser::selected_file_name(&ev);
                                vm.form.update(|f| f.proof_image = file_name);
                            }
                        />
                        {icon("upload")}
                        <span>
                            {move || vm.form.with(|f| {
                                f.proof_image.clone().unwrap_or_else(|| "Klik untuk pilih file...".to_string())
                            })}
                        </span>
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-dark btn-grow" on:click=move |_| vm.save_command(Some(jamaah_id), on_saved)>
                    "Simpan Jurnal"
                </button>
                <button class="btn btn-light" on:click=move |_| on_close.run(())>"Batal"</button>
            </div>
        </Modal>
    }
}
