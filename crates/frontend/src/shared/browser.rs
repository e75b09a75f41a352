//! Thin wrappers over `window` calls used by several pages

use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Browser confirm dialog; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::error!("window.print failed: {:?}", e);
        }
    }
}

pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Name of the first file picked in an `<input type="file">`; the content is never read
pub fn selected_file_name(ev: &web_sys::Event) -> Option<String> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())?;
    input.files()?.get(0).map(|file| file.name())
}
