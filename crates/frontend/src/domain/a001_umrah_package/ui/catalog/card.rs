use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a001_umrah_package::aggregate::UmrahPackage;
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;

#[component]
pub fn PackageCard(package: UmrahPackage) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let id = package.id;
    let whatsapp_href = {
        let package = package.clone();
        move || {
            ctx.settings.with(|s| {
                s.whatsapp_link(&package.whatsapp_inquiry_text(&s.agency_name))
            })
        }
    };

    view! {
        <div class="package-card">
            <div class="package-card__media">
                <img src=package.image.clone() alt=package.name.clone() />
                <span class="package-card__duration">{format!("{} Hari", package.duration)}</span>
                {package.is_popular.then(|| view! {
                    <span class="package-card__popular">"Best Seller"</span>
                })}
                <div class="package-card__departure">
                    {format!("Berangkat: {}", package.departure_date)}
                </div>
            </div>

            <div class="package-card__body">
                <h3 class="package-card__title">{package.name.clone()}</h3>
                <div class="package-card__price">
                    <span class="package-card__price-from">"Mulai"</span>
                    {format_rupiah(package.price)}
                </div>

                <ul class="package-card__facts">
                    <li>{icon("plane")}<span>{package.airline.clone()}</span></li>
                    <li>{icon("hotel")}<span>{format!("Med: {}", package.hotel_madinah)}</span></li>
                    <li>{icon("hotel")}<span>{format!("Mak: {}", package.hotel_makkah)}</span></li>
                </ul>

                <div class="package-card__actions">
                    <button class="btn btn-primary btn-block" on:click=move |_| ctx.book_package(Some(id))>
                        "Booking Sekarang"
                    </button>
                    <div class="package-card__secondary">
                        <button class="btn btn-light" on:click=move |_| ctx.open_preview(id)>
                            {icon("file-text")}
                            "Brosur PDF"
                        </button>
                        <a class="btn btn-whatsapp" href=whatsapp_href target="_blank" rel="noopener">
                            {icon("whatsapp")}
                            "WhatsApp"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
