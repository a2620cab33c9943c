use biblioteca_core::counter;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;

/// Two independent comprehension aids: contextual help disclosures for
/// `[data-help]` triggers, and live remaining-character counters for every
/// length-limited text field.
pub struct UsabilityEnhancer {
    _help_listeners: Vec<EventListenerHandle>,
    _counter_listeners: Vec<EventListenerHandle>,
}

impl UsabilityEnhancer {
    /// # Errors
    /// Fails when the document is unavailable or wiring hits a JS error.
    /// A page with neither help triggers nor limited fields is fine.
    pub fn init() -> Result<Self, InitError> {
        let doc = dom::document().ok_or(InitError::NoDocument)?;
        Ok(Self {
            _help_listeners: wire_help_toggles(&doc)?,
            _counter_listeners: wire_character_counters(&doc)?,
        })
    }
}

fn wire_help_toggles(doc: &Document) -> Result<Vec<EventListenerHandle>, JsValue> {
    let triggers = doc.query_selector_all("[data-help]")?;
    let mut listeners = Vec::new();
    for index in 0..triggers.length() {
        let Some(trigger) = triggers
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let owner = trigger.clone();
        listeners.push(EventListenerHandle::listen(&trigger, "click", move |_| {
            toggle_help(&owner);
        })?);
    }
    Ok(listeners)
}

/// Flip the referenced help panel between hidden and shown and mirror the
/// new visibility into `aria-expanded`. Two activations restore the
/// original state.
fn toggle_help(trigger: &Element) {
    let Some(help_id) = trigger.get_attribute("data-help") else {
        return;
    };
    let Some(help) = dom::document()
        .and_then(|doc| doc.get_element_by_id(&help_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let visible = help
        .style()
        .get_property_value("display")
        .map(|display| display != "none")
        .unwrap_or(true);
    let next_visible = !visible;

    let _ = help
        .style()
        .set_property("display", if next_visible { "block" } else { "none" });
    let _ = trigger.set_attribute("aria-expanded", if next_visible { "true" } else { "false" });
}

fn wire_character_counters(doc: &Document) -> Result<Vec<EventListenerHandle>, JsValue> {
    let fields = doc.query_selector_all("input[type=\"text\"], textarea")?;
    let mut listeners = Vec::new();
    for index in 0..fields.length() {
        let Some(field) = fields
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(max_length) = field
            .get_attribute("maxlength")
            .and_then(|raw| raw.parse::<u32>().ok())
        else {
            continue;
        };
        if let Some(listener) = attach_counter(doc, &field, max_length)? {
            listeners.push(listener);
        }
    }
    Ok(listeners)
}

fn attach_counter(
    doc: &Document,
    field: &Element,
    max_length: u32,
) -> Result<Option<EventListenerHandle>, JsValue> {
    let Some(parent) = field.parent_node() else {
        return Ok(None);
    };

    let counter_el: HtmlElement = doc.create_element("div")?.unchecked_into();
    counter_el.set_class_name("character-counter");
    counter_el.set_attribute("aria-live", "polite")?;
    let style = counter_el.style();
    style.set_property("font-size", "0.875rem")?;
    style.set_property("margin-top", "var(--spacing-xs)")?;
    parent.append_child(&counter_el)?;

    let watched = field.clone();
    let display = counter_el.clone();
    let update = move || update_counter(&watched, &display, max_length);
    update();

    let listener = EventListenerHandle::listen(field, "input", move |_| update())?;
    Ok(Some(listener))
}

fn update_counter(field: &Element, counter_el: &HtmlElement, max_length: u32) {
    let length = field_value(field).chars().count();
    let view = counter::view(max_length, u32::try_from(length).unwrap_or(u32::MAX));
    counter_el.set_text_content(Some(&view.text));
    let color = if view.warning {
        "var(--warning-color)"
    } else {
        "var(--text-secondary)"
    };
    let _ = counter_el.style().set_property("color", color);
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
