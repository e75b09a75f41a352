//! Public package catalogue: cards and the grid used on Home and Packages

mod card;

pub use card::PackageCard;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn PackageGrid() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="package-grid">
            <For
                each=move || ctx.packages()
                key=|pkg| pkg.clone()
                children=move |pkg| view! { <PackageCard package=pkg /> }
            />
        </div>
        <Show when=move || ctx.registry.with(|r| r.packages.is_empty())>
            <div class="empty-state">"Belum ada paket yang tersedia."</div>
        </Show>
    }
}
