use biblioteca_core::cards;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;

/// Makes book cards keyboard-operable: each card becomes focusable with a
/// computed accessible label, Enter activates a focused card's primary
/// action and Escape drops focus wherever it is.
pub struct KeyboardNav {
    _keydown: EventListenerHandle,
}

impl KeyboardNav {
    /// # Errors
    /// Fails when the document is unavailable or card annotation hits a JS
    /// error. A page without cards is fine; the Escape handling still
    /// applies.
    pub fn init() -> Result<Self, InitError> {
        let doc = dom::document().ok_or(InitError::NoDocument)?;
        annotate_book_cards(&doc)?;

        let keydown = EventListenerHandle::listen(&doc, "keydown", |event: Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                handle_keydown(key_event);
            }
        })?;

        Ok(Self { _keydown: keydown })
    }
}

fn annotate_book_cards(doc: &Document) -> Result<(), JsValue> {
    let cards = doc.query_selector_all(".book-card")?;
    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        card.set_attribute("tabindex", "0")?;
        card.set_attribute("role", "button")?;

        let title = child_text(&card, ".book-title");
        let author = child_text(&card, ".book-author");
        card.set_attribute("aria-label", &cards::accessible_label(&title, &author))?;
    }
    Ok(())
}

fn child_text(card: &Element, selector: &str) -> String {
    card.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn handle_keydown(event: &KeyboardEvent) {
    match event.key().as_str() {
        "Escape" => blur_active_element(),
        "Enter" => activate_card(event),
        _ => {}
    }
}

fn blur_active_element() {
    if let Some(active) = dom::document().and_then(|doc| doc.active_element())
        && let Some(element) = active.dyn_ref::<HtmlElement>()
    {
        let _ = element.blur();
    }
}

/// Enter on a focused card clicks its primary action, so cards that are
/// not native buttons still activate from the keyboard.
fn activate_card(event: &KeyboardEvent) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    if !target.class_list().contains("book-card") {
        return;
    }
    if let Ok(Some(button)) = target.query_selector(".btn")
        && let Some(button) = button.dyn_ref::<HtmlElement>()
    {
        button.click();
    }
}
