//! Brochure preview of one package, opened from a card's "Brosur PDF"

use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_umrah_package::aggregate::UmrahPackage;
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;

/// Renders the preview modal while `preview_package` points at an existing package
#[component]
pub fn PackagePreview() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let previewed = move || {
        let id = ctx.preview_package.get()?;
        ctx.registry.with(|r| r.package(id).cloned())
    };

    move || previewed().map(|package| view! { <PackagePreviewModal package=package /> })
}

#[component]
fn PackagePreviewModal(package: UmrahPackage) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let id = package.id;
    let on_close = Callback::new(move |_| ctx.close_preview());

    let facts = [
        ("Durasi", format!("{} Hari", package.duration)),
        ("Berangkat", package.departure_date.clone()),
        ("Maskapai", package.airline.clone()),
        ("Hotel Makkah", package.hotel_makkah.clone()),
    ];

    view! {
        <Modal title=package.name.clone() on_close=on_close class="modal--wide package-preview">
            <div class="package-preview__layout">
                <div class="package-preview__media">
                    <img src=package.image.clone() alt=package.name.clone() />
                    <div class="package-preview__caption">
                        <h2>{package.name.clone()}</h2>
                        <div class="package-preview__price">{format_rupiah(package.price)}</div>
                    </div>
                </div>

                <div class="package-preview__details">
                    <div class="package-preview__facts">
                        {facts.into_iter().map(|(label, value)| view! {
                            <div class="fact">
                                <p class="fact__label">{label}</p>
                                <p class="fact__value">{value}</p>
                            </div>
                        }).collect_view()}
                    </div>

                    <h3 class="package-preview__heading">{icon("check-circle")}"Sudah Termasuk (Inclusions)"</h3>
                    <ul class="package-preview__list">
                        {package.inclusions.iter().map(|item| view! {
                            <li class="included">{icon("check")}{item.clone()}</li>
                        }).collect_view()}
                    </ul>

                    <h3 class="package-preview__heading">{icon("x-circle")}"Belum Termasuk (Exclusions)"</h3>
                    <ul class="package-preview__list">
                        {package.exclusions.iter().map(|item| view! {
                            <li class="excluded">{icon("x")}{item.clone()}</li>
                        }).collect_view()}
                    </ul>

                    <div class="package-preview__actions">
                        <button class="btn btn-primary btn-grow" on:click=move |_| {
                            ctx.close_preview();
                            ctx.book_package(Some(id));
                        }>
                            "Daftar Sekarang"
                        </button>
                        <button class="btn btn-light" on:click=move |_| browser::print_page()>
                            {icon("printer")}
                            "Download Brosur"
                        </button>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
