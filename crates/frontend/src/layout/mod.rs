pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Navbar;
use leptos::prelude::*;

/// Public site layout.
///
/// ```text
/// +------------------------------------------+
/// |          Navbar (fixed, top)              |
/// +------------------------------------------+
/// |             page content                  |
/// +------------------------------------------+
/// |                Footer                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {center()}
            </main>
            <Footer />
        </div>
    }
}
