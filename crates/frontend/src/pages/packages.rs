use crate::domain::a001_umrah_package::ui::catalog::PackageGrid;
use leptos::prelude::*;

#[component]
pub fn PackagesPage() -> impl IntoView {
    view! {
        <section class="section section--muted section--page">
            <div class="container">
                <div class="section__head">
                    <h1>"Semua Paket Umrah"</h1>
                    <p class="muted">"Temukan jadwal keberangkatan terbaik untuk ibadah Anda."</p>
                </div>
                <PackageGrid/>
            </div>
        </section>
    }
}
