use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, ErrorEvent, Event};

use crate::dom;
use crate::events::EventListenerHandle;

/// Text of the generic fallback banner shown for uncaught errors.
pub const FALLBACK_MESSAGE: &str =
    "Ha ocurrido un error. Por favor recarga la página o intenta nuevamente.";

/// Why a component could not be wired up. Missing pieces of the page are
/// expected degradations; only genuine JS failures get surfaced to the
/// user.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

impl InitError {
    /// Degradations that only mean the page lacks the relevant markup.
    #[must_use]
    pub const fn is_degradation(&self) -> bool {
        matches!(
            self,
            Self::NoWindow | Self::NoDocument | Self::MissingElement(_)
        )
    }
}

/// Global catch-all for uncaught script errors, plus one-time capability
/// checks. Capability gaps are warnings only; the affected components
/// already degrade on their own.
pub struct GlobalErrorHandler {
    _error_listener: EventListenerHandle,
}

impl GlobalErrorHandler {
    /// # Errors
    /// Fails only when the window is unavailable or the listener cannot be
    /// attached.
    pub fn init() -> Result<Self, InitError> {
        check_capabilities();
        let win = dom::window().ok_or(InitError::NoWindow)?;
        let error_listener = EventListenerHandle::listen(&win, "error", on_uncaught_error)?;
        Ok(Self {
            _error_listener: error_listener,
        })
    }
}

fn on_uncaught_error(event: Event) {
    let detail = event
        .dyn_ref::<ErrorEvent>()
        .map_or_else(String::new, |err| err.message());
    dom::console_error(&format!("Error detectado: {detail}"));
    show_error_banner();
}

/// Insert the generic fallback banner at the top of the main content
/// container. No-op when the container is absent.
pub(crate) fn show_error_banner() {
    let Some(doc) = dom::document() else {
        return;
    };
    if let Err(err) = insert_banner(&doc) {
        log::error!(
            "error banner not shown: {}",
            dom::js_error_message(&err)
        );
    }
}

fn insert_banner(doc: &Document) -> Result<(), JsValue> {
    let Some(container) = doc.query_selector(".container")? else {
        return Ok(());
    };

    let banner = doc.create_element("div")?;
    banner.set_class_name("alert alert-error");
    banner.set_attribute("role", "alert")?;

    let icon = doc.create_element("span")?;
    icon.set_attribute("aria-hidden", "true")?;
    icon.set_text_content(Some("\u{26a0}\u{fe0f} "));
    banner.append_child(&icon)?;
    banner.append_with_str_1(FALLBACK_MESSAGE)?;

    container.insert_before(&banner, container.first_child().as_ref())?;
    Ok(())
}

fn check_capabilities() {
    if dom::local_storage().is_none() {
        log::warn!("LocalStorage no disponible, usando configuración por defecto");
    }
    let media_queries_ok = dom::window()
        .is_some_and(|win| win.match_media("(prefers-reduced-motion: reduce)").is_ok());
    if !media_queries_ok {
        log::warn!("Media queries no soportadas completamente");
    }
}
