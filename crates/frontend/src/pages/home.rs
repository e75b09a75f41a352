use crate::domain::a001_umrah_package::ui::catalog::PackageGrid;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const HERO_STATS: [(&str, &str); 4] = [
    ("10k+", "Jamaah Terangkat"),
    ("99%", "Tingkat Kepuasan"),
    ("12+", "Tahun Pengalaman"),
    ("Official", "IATA & PPIU Certified"),
];

#[component]
fn Hero() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <div class="hero__badge">
                    <span class="hero__pulse"></span>
                    "Travel Umrah Berizin Resmi PPIU"
                </div>
                <h1 class="hero__title">
                    "Penuhi Panggilan-Nya dengan "
                    <span class="text-accent">"Kenyamanan & Khidmat"</span>
                </h1>
                <p class="hero__lead">
                    {move || format!(
                        "{} mendampingi perjalanan ibadah Anda menuju Baitullah dengan pelayanan prima, bimbingan sesuai sunnah, dan akomodasi bintang lima.",
                        ctx.agency_name(),
                    )}
                </p>
                <div class="hero__actions">
                    <button class="btn btn-accent btn-lg" on:click=move |_| ctx.navigate(Page::Packages)>
                        "Lihat Paket Umrah"
                    </button>
                    <button class="btn btn-glass btn-lg">
                        {icon("play")}
                        " Tonton Video Manasik"
                    </button>
                </div>
            </div>
            <div class="hero__stats">
                {HERO_STATS
                    .into_iter()
                    .map(|(value, label)| view! {
                        <div class="hero__stat">
                            <p class="hero__stat-value">{value}</p>
                            <p class="hero__stat-label">{label}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <section id="featured-packages" class="section section--muted">
            <div class="container">
                <div class="section__head section__head--center">
                    <h2>"Paket Umrah Unggulan"</h2>
                    <p class="muted">
                        "Pilih paket perjalanan ibadah yang sesuai dengan kebutuhan Anda. Kami menjamin kenyamanan dan kekhusyukan ibadah Anda."
                    </p>
                </div>
                <PackageGrid/>
            </div>
        </section>
    }
}
