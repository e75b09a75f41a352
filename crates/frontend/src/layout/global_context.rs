use crate::shared::browser;
use contracts::domain::a001_umrah_package::aggregate::{UmrahPackage, UmrahPackageId};
use contracts::shared::registry::AgencyRegistry;
use contracts::shared::settings::SystemSettings;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens; the key is what lands in `?page=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Packages,
    Registration,
    Admin,
    Payments,
    Reports,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Packages => "packages",
            Page::Registration => "registration",
            Page::Admin => "admin",
            Page::Payments => "payments",
            Page::Reports => "reports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(Page::Home),
            "packages" => Some(Page::Packages),
            "registration" => Some(Page::Registration),
            "admin" => Some(Page::Admin),
            "payments" => Some(Page::Payments),
            "reports" => Some(Page::Reports),
            _ => None,
        }
    }

    /// Navbar links in display order
    pub fn nav_links() -> [(Page, &'static str); 5] {
        [
            (Page::Home, "Beranda"),
            (Page::Packages, "Paket"),
            (Page::Admin, "Admin"),
            (Page::Payments, "Pembayaran"),
            (Page::Reports, "Laporan"),
        ]
    }
}

/// Page encoded in a location search string such as `?page=admin`
pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

/// Search string for a page, including the leading `?`
pub fn page_query(page: Page) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

/// Shared application state: the agency records plus navigation.
///
/// Everything lives in memory; a reload starts from the seeded registry.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub registry: RwSignal<AgencyRegistry>,
    pub settings: RwSignal<SystemSettings>,
    /// Package pre-selected on the registration form
    pub booking_package: RwSignal<Option<UmrahPackageId>>,
    /// Package shown in the brochure preview modal
    pub preview_package: RwSignal<Option<UmrahPackageId>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Home),
            registry: RwSignal::new(AgencyRegistry::seeded()),
            settings: RwSignal::new(SystemSettings::default()),
            booking_package: RwSignal::new(None),
            preview_package: RwSignal::new(None),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_query(this.page.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
            browser::scroll_to_top(false);
        });
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("🔷 navigate: page='{}'", page.key());
        self.page.set(page);
    }

    /// Open the registration form, optionally with a package already chosen
    pub fn book_package(&self, package_id: Option<UmrahPackageId>) {
        self.booking_package.set(package_id);
        self.navigate(Page::Registration);
    }

    pub fn open_preview(&self, package_id: UmrahPackageId) {
        leptos::logging::log!("🔶 open_preview: {:?}", package_id);
        self.preview_package.set(Some(package_id));
    }

    pub fn close_preview(&self) {
        self.preview_package.set(None);
    }

    pub fn agency_name(&self) -> String {
        self.settings.with(|s| s.agency_name.clone())
    }

    /// For event handlers and one-off initial values
    pub fn agency_name_untracked(&self) -> String {
        self.settings.with_untracked(|s| s.agency_name.clone())
    }

    /// Live package catalogue
    pub fn packages(&self) -> Vec<UmrahPackage> {
        self.registry.with(|r| r.packages.clone())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_read_from_query() {
        assert_eq!(page_from_query("?page=admin"), Some(Page::Admin));
        assert_eq!(page_from_query("page=reports&x=1"), Some(Page::Reports));
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page=unknown"), None);
    }

    #[test]
    fn page_query_round_trips() {
        assert_eq!(page_query(Page::Payments), "?page=payments");
        for (page, _) in Page::nav_links() {
            assert_eq!(page_from_query(&page_query(page)), Some(page));
        }
        assert_eq!(
            page_from_query(&page_query(Page::Registration)),
            Some(Page::Registration)
        );
    }

    #[test]
    fn serde_names_match_keys() {
        assert_eq!(
            serde_json::to_string(&Page::Packages).unwrap(),
            "\"packages\""
        );
    }
}
