use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Agency state (catalogue, bookings, payments, settings) for the whole app.
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
