//! Application shell: page switch inside the public layout, plus the
//! overlays that live above every page (brochure preview, AI chat).

use crate::dashboards::{AdminConsoleDashboard, OperationalReportsDashboard};
use crate::domain::a001_umrah_package::ui::preview::PackagePreview;
use crate::domain::a002_jamaah::ui::registration::RegistrationForm;
use crate::domain::a003_payment::ui::dashboard::PaymentDashboard;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::pages::{HomePage, PackagesPage};
use crate::usecases::AiConsultant;
use leptos::logging::log;
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    log!("📄 render page '{}'", page.key());
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Packages => view! { <PackagesPage/> }.into_any(),
        Page::Registration => view! {
            <div class="section section--muted section--page">
                <RegistrationForm/>
            </div>
        }
        .into_any(),
        Page::Admin => view! { <div class="section section--page"><AdminConsoleDashboard/></div> }.into_any(),
        Page::Payments => view! { <div class="section section--page"><PaymentDashboard/></div> }.into_any(),
        Page::Reports => view! { <div class="section section--page"><OperationalReportsDashboard/></div> }.into_any(),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || view! { {move || render_page(ctx.page.get())} }.into_any()/>
        <PackagePreview/>
        <AiConsultant/>
    }
}
