//! "Paket Umrah" tab of the admin console

use super::details::UmrahPackageDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::icons::icon;
use contracts::domain::a001_umrah_package::aggregate::{UmrahPackage, UmrahPackageId};
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;
use thaw::*;

const DELETE_CONFIRM: &str = "Hapus paket ini? Ini akan berdampak pada tampilan pendaftaran.";

#[component]
pub fn UmrahPackageList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // None: closed, Some(None): new package, Some(Some(id)): editing
    let editing: RwSignal<Option<Option<UmrahPackageId>>> = RwSignal::new(None);

    let close = Callback::new(move |_| editing.set(None));

    let delete = move |id: UmrahPackageId| {
        if browser::confirm(DELETE_CONFIRM) {
            ctx.registry.update(|r| r.delete_package(id));
        }
    };

    let package_card = move |pkg: UmrahPackage| {
        let id = pkg.id;
        view! {
            <div class="admin-package">
                <div class="admin-package__media">
                    <img src=pkg.image.clone() alt="" />
                    <div class="admin-package__overlay">
                        <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(Some(id)))>
                            {icon("edit")}
                        </button>
                        <button class="button button--icon button--danger" title="Hapus" on:click=move |_| delete(id)>
                            {icon("delete")}
                        </button>
                    </div>
                </div>
                <h4 class="admin-package__name">{pkg.name.clone()}</h4>
                <p class="admin-package__departure">{pkg.departure_date.clone()}</p>
                <div class="admin-package__footer">
                    <span class="admin-package__price">{format_rupiah(pkg.price)}</span>
                    <span class="admin-package__duration">{format!("{} HARI", pkg.duration)}</span>
                </div>
            </div>
        }
    };

    view! {
        <div class="admin-packages">
            <div class="section-header">
                <h3 class="section-title">"Active Packages"</h3>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    "Tambah Paket Baru"
                </Button>
            </div>

            <div class="admin-package-grid">
                <For
                    each=move || ctx.packages()
                    key=|pkg| pkg.clone()
                    children=package_card
                />
            </div>

            {move || editing.get().map(|package_id| view! {
                <UmrahPackageDetails
                    package_id=package_id
                    on_saved=close
                    on_close=close
                />
            })}
        </div>
    }
}
