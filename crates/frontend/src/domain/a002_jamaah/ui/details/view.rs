use super::view_model::JamaahDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use contracts::domain::a002_jamaah::aggregate::{
    JamaahEditDto, JamaahId, PaymentStatus, RegistrationStatus,
};
use leptos::prelude::*;

#[component]
pub fn JamaahDetails(
    jamaah_id: JamaahId,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let vm = JamaahDetailsViewModel::new(ctx.registry);
    vm.load(jamaah_id);

    let field = move |get: fn(&JamaahEditDto) -> String| {
        move || vm.form.with(|f| f.as_ref().map(get).unwrap_or_default())
    };

    view! {
        <Modal title="Edit Record Jamaah" on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="details-form form-grid">
                <div class="form-group form-group--wide">
                    <label>"Nama Lengkap"</label>
                    <input
                        type="text"
                        prop:value=field(|f| f.full_name.clone())
                        on:input=move |ev| vm.update_form(|f| f.full_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"WhatsApp"</label>
                    <input
                        type="text"
                        prop:value=field(|f| f.phone.clone())
                        on:input=move |ev| vm.update_form(|f| f.phone = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=field(|f| f.email.clone())
                        on:input=move |ev| vm.update_form(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Registration Status"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(status) = RegistrationStatus::from_label(&event_target_value(&ev)) {
                                vm.update_form(|f| f.registration_status = status);
                            }
                        }
                    >
                        {RegistrationStatus::all().into_iter().map(|s| view! {
                            <option
                                value=s.as_str()
                                selected=move || vm.form.with(|f| f.as_ref().is_some_and(|f| f.registration_status == s))
                            >
                                {s.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Payment Status"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(status) = PaymentStatus::from_label(&event_target_value(&ev)) {
                                vm.update_form(|f| f.payment_status = status);
                            }
                        }
                    >
                        {PaymentStatus::all().into_iter().map(|s| view! {
                            <option
                                value=s.as_str()
                                selected=move || vm.form.with(|f| f.as_ref().is_some_and(|f| f.payment_status == s))
                            >
                                {s.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary btn-grow"
                    disabled=move || vm.form.with(|f| f.is_none())
                    on:click=move |_| vm.save_command(on_saved)
                >
                    "Update Jamaah"
                </button>
                <button class="btn btn-light" on:click=move |_| on_close.run(())>"Batal"</button>
            </div>
        </Modal>
    }
}
