use std::cell::RefCell;
use std::rc::Rc;

use biblioteca_core::announce::{ALERT_TTL_MS, Announcement};
use biblioteca_core::search::{self, QueryError};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::announcer::Announcer;
use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;
use crate::timers::TransientNode;

/// Intercepts the search form's submission and reports validation results
/// accessibly. No actual search is performed; a valid query only yields a
/// transient success banner.
pub struct FormValidator {
    inner: Rc<Inner>,
    _submit: EventListenerHandle,
}

struct Inner {
    form: Element,
    input: HtmlInputElement,
    error_region: HtmlElement,
    announcer: Rc<Announcer>,
    banners: RefCell<Vec<TransientNode>>,
}

impl FormValidator {
    /// # Errors
    /// Fails when the form, the query input or the error region is missing
    /// from the page.
    pub fn init(announcer: Rc<Announcer>) -> Result<Self, InitError> {
        let doc = dom::document().ok_or(InitError::NoDocument)?;
        let form = doc
            .query_selector(".search-form")?
            .ok_or(InitError::MissingElement(".search-form"))?;
        let input = doc
            .get_element_by_id("searchQuery")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or(InitError::MissingElement("#searchQuery"))?;
        let error_region = doc
            .get_element_by_id("searchError")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(InitError::MissingElement("#searchError"))?;

        let inner = Rc::new(Inner {
            form: form.clone(),
            input,
            error_region,
            announcer,
            banners: RefCell::new(Vec::new()),
        });

        let handler = Rc::clone(&inner);
        let submit = EventListenerHandle::listen(&form, "submit", move |event| {
            event.prevent_default();
            handler.submit();
        })?;

        Ok(Self {
            inner,
            _submit: submit,
        })
    }

    /// Run the validation pipeline as if the form had been submitted.
    pub fn submit(&self) {
        self.inner.submit();
    }
}

impl Inner {
    fn submit(&self) {
        // Prior error state goes away unconditionally before re-validating.
        self.clear_error();

        match search::validate_query(&self.input.value()) {
            Ok(query) => self.show_success(&search::success_message(&query)),
            Err(error) => self.show_error(error),
        }
    }

    fn clear_error(&self) {
        let _ = self.input.set_attribute("aria-invalid", "false");
        let _ = self.error_region.style().set_property("display", "none");
        let _ = self.input.style().remove_property("border-color");
    }

    fn show_error(&self, error: QueryError) {
        let _ = self.input.set_attribute("aria-invalid", "true");
        let _ = self
            .input
            .style()
            .set_property("border-color", "var(--error-color)");
        self.error_region.set_text_content(Some(&error.to_string()));
        let _ = self.error_region.style().set_property("display", "flex");
        let _ = self.input.focus();

        self.announcer
            .announce(&Announcement::alert(search::error_announcement(error)));
    }

    fn show_success(&self, message: &str) {
        if let Err(err) = self.insert_success_banner(message) {
            log::warn!(
                "success banner not shown: {}",
                dom::js_error_message(&err)
            );
        }
    }

    fn insert_success_banner(&self, message: &str) -> Result<(), JsValue> {
        let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;

        let banner = doc.create_element("div")?;
        banner.set_class_name("alert alert-success");
        banner.set_attribute("role", "status")?;
        banner.set_attribute("aria-live", "polite")?;

        let icon = doc.create_element("span")?;
        icon.set_attribute("aria-hidden", "true")?;
        icon.set_text_content(Some("\u{2705} "));
        banner.append_child(&icon)?;
        banner.append_with_str_1(message)?;

        self.form
            .insert_before(&banner, self.form.first_child().as_ref())?;

        let guard = TransientNode::remove_after(banner, ALERT_TTL_MS)?;
        let mut banners = self.banners.borrow_mut();
        banners.retain(|entry| !entry.expired());
        banners.push(guard);
        Ok(())
    }
}
