use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Storage, Window};

use biblioteca_core::theme::{self, Theme};

/// Retrieve the global `window` object, if running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// The root `<html>` element, which carries the `data-theme` attribute and
/// the inline `--transition` override.
#[must_use]
pub fn root_element() -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Access the browser `localStorage` handle, when available.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// The persisted theme preference. An unreadable or malformed stored value
/// is treated the same as no preference at all.
#[must_use]
pub fn stored_theme() -> Option<Theme> {
    local_storage()
        .and_then(|storage| storage.get_item(theme::STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse().ok())
}

/// Reflect the active theme on the root element for the stylesheet.
pub fn set_theme_attribute(active: Theme) {
    if let Some(root) = root_element() {
        let _ = root.set_attribute(theme::ROOT_ATTRIBUTE, active.as_str());
    }
}

/// Set or clear the inline `--transition: none` override that suspends
/// CSS-transition-driven motion page-wide.
pub fn set_transition_disabled(disabled: bool) {
    let Some(root) = root_element() else {
        return;
    };
    let style = root.style();
    if disabled {
        let _ = style.set_property("--transition", "none");
    } else {
        let _ = style.remove_property("--transition");
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds. Used by the
/// browser test suites to wait out announcement lifetimes.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be
/// scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let Some(win) = web_sys::window() else {
        return Err(JsValue::from_str("window unavailable"));
    };

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
