#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod announcer;
pub mod app;
pub mod dom;
pub mod errors;
pub mod events;
pub mod form;
pub mod keyboard;
pub mod prefs;
pub mod theme;
pub mod timers;
pub mod usability;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static APP: std::cell::RefCell<Option<app::App>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    match dom::document() {
        Some(doc) if doc.ready_state() == "loading" => {
            // Parsing is still underway; defer until the DOM exists. The
            // one-shot listener is leaked on purpose, it lives as long as
            // the page does.
            use wasm_bindgen::JsCast;
            let closure = wasm_bindgen::closure::Closure::once(install_app);
            let _ = doc.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
        _ => install_app(),
    }
}

#[cfg(target_arch = "wasm32")]
fn install_app() {
    APP.with(|slot| slot.replace(Some(app::App::boot())));
}
