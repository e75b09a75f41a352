use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::browser;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll offset after which the navbar switches to its solid variant
const SOLID_AFTER_PX: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_scrolled = RwSignal::new(browser::scroll_y() > SOLID_AFTER_PX);
    let mobile_open = RwSignal::new(false);

    // The navbar lives as long as the app, so the listener is never removed
    if let Some(window) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            is_scrolled.set(browser::scroll_y() > SOLID_AFTER_PX);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let go = move |page: Page| {
        mobile_open.set(false);
        ctx.navigate(page);
    };

    let link_class = move |page: Page| {
        if ctx.page.get() == page {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    view! {
        <nav class=move || if is_scrolled.get() { "navbar navbar--solid" } else { "navbar" }>
            <div class="container navbar__inner">
                <div class="navbar__brand" on:click=move |_| go(Page::Home)>
                    <div class="navbar__logo">"A"</div>
                    <span class="navbar__name">
                        {move || ctx.agency_name()}
                    </span>
                </div>

                <div class="navbar__links">
                    {Page::nav_links().into_iter().map(|(page, label)| view! {
                        <button class=move || link_class(page) on:click=move |_| go(page)>
                            {label}
                        </button>
                    }).collect_view()}
                    <button class="navbar__cta" on:click=move |_| {
                        mobile_open.set(false);
                        ctx.book_package(None);
                    }>
                        "Booking"
                    </button>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="navbar__mobile">
                    {Page::nav_links().into_iter().map(|(page, label)| view! {
                        <button class=move || link_class(page) on:click=move |_| go(page)>
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
