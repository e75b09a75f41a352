use super::settings_tab::SettingsTab;
use crate::domain::a001_umrah_package::ui::list::UmrahPackageList;
use crate::domain::a002_jamaah::ui::list::JamaahList;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AdminConsoleDashboard() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let selected_tab = RwSignal::new("jamaah".to_string());
    let subtitle = Signal::derive(move || {
        Some(format!("Control center for {} Operations.", ctx.agency_name()))
    });

    view! {
        <div class="page page--admin">
            <PageHeader title="Management Console" subtitle=subtitle>
                <TabList selected_value=selected_tab>
                    <Tab value="jamaah">"Jamaah"</Tab>
                    <Tab value="packages">"Paket Umrah"</Tab>
                    <Tab value="settings">"Settings"</Tab>
                </TabList>
            </PageHeader>

            {move || match selected_tab.get().as_str() {
                "packages" => view! { <UmrahPackageList/> }.into_any(),
                "settings" => view! { <SettingsTab/> }.into_any(),
                _ => view! { <JamaahList/> }.into_any(),
            }}
        </div>
    }
}
