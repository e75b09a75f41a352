use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Quick links; entries without a page are static text
const QUICK_LINKS: [(&str, Option<Page>); 5] = [
    ("Beranda", Some(Page::Home)),
    ("Paket Umrah", Some(Page::Packages)),
    ("Pendaftaran", Some(Page::Registration)),
    ("Syarat & Ketentuan", None),
    ("Kebijakan Privasi", None),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let settings = ctx.settings;

    let newsletter_email = RwSignal::new(String::new());
    let newsletter_note = RwSignal::new(None::<String>);

    let subscribe = move |_| {
        let email = newsletter_email.get_untracked();
        if email.contains('@') {
            log::info!("newsletter subscription: {}", email);
            newsletter_email.set(String::new());
            newsletter_note.set(Some("Terima kasih, Anda telah terdaftar.".to_string()));
        } else {
            newsletter_note.set(Some("Alamat email tidak valid".to_string()));
        }
    };

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo-row">
                        <div class="footer__logo">"A"</div>
                        <span class="footer__name">{move || settings.with(|s| s.agency_name.clone())}</span>
                    </div>
                    <p class="footer__muted">
                        "Penyelenggara Perjalanan Ibadah Umrah (PPIU) resmi yang mengutamakan kekhusyukan dan kenyamanan jamaah."
                    </p>
                    <div class="footer__socials">
                        <span class="footer__social">{move || settings.with(|s| s.instagram.clone())}</span>
                        <span class="footer__social">{move || settings.with(|s| s.facebook.clone())}</span>
                    </div>
                </div>

                <div>
                    <h4 class="footer__heading">"Tautan Cepat"</h4>
                    <ul class="footer__links">
                        {QUICK_LINKS.into_iter().map(|(label, page)| view! {
                            <li>
                                <button class="footer__link" on:click=move |_| {
                                    if let Some(page) = page {
                                        ctx.navigate(page);
                                    }
                                }>
                                    {icon("chevron-right")}
                                    {label}
                                </button>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Hubungi Kami"</h4>
                    <ul class="footer__contacts">
                        <li>{icon("map-pin")}<span>{move || settings.with(|s| s.address.clone())}</span></li>
                        <li>{icon("phone")}<span>{move || settings.with(|s| format!("+{}", s.whatsapp_hotline))}</span></li>
                        <li>{icon("mail")}<span>{move || settings.with(|s| s.support_email.clone())}</span></li>
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Buletin Haji & Umrah"</h4>
                    <p class="footer__muted footer__small">
                        "Dapatkan info jadwal keberangkatan dan tips ibadah langsung di email Anda."
                    </p>
                    <div class="footer__newsletter">
                        <input
                            type="email"
                            placeholder="Email Anda"
                            prop:value=move || newsletter_email.get()
                            on:input=move |ev| newsletter_email.set(event_target_value(&ev))
                        />
                        <button on:click=subscribe>"Daftar"</button>
                    </div>
                    {move || newsletter_note.get().map(|note| view! {
                        <p class="footer__small">{note}</p>
                    })}
                </div>
            </div>

            <div class="container footer__bottom">
                <p>
                    {move || format!("© 2024 {}. Seluruh Hak Cipta Dilindungi.", settings.with(|s| s.agency_name.clone()))}
                </p>
                <div class="footer__badges">
                    <span><i class="dot"></i>{move || settings.with(|s| format!("PPIU {}", s.license_number))}</span>
                    <span><i class="dot"></i>"IATA Member"</span>
                </div>
            </div>
        </footer>
    }
}
