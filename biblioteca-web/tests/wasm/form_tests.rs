use std::rc::Rc;

use biblioteca_web::announcer::Announcer;
use biblioteca_web::dom;
use biblioteca_web::form::FormValidator;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlInputElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn build_form_fixture() -> FormValidator {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(
        "<form class=\"search-form\">\
           <input type=\"search\" id=\"searchQuery\" />\
           <div id=\"searchError\" style=\"display:none\"></div>\
         </form>",
    );
    FormValidator::init(Rc::new(Announcer::new())).expect("init form validator")
}

fn query_input() -> HtmlInputElement {
    dom::document()
        .and_then(|doc| doc.get_element_by_id("searchQuery"))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .expect("query input")
}

fn error_text() -> String {
    dom::document()
        .and_then(|doc| doc.get_element_by_id("searchError"))
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn short_query_marks_the_input_invalid() {
    let validator = build_form_fixture();
    let input = query_input();
    input.set_value("a");

    validator.submit();

    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));
    assert_eq!(
        error_text(),
        "Por favor ingresa al menos 2 caracteres para buscar"
    );
    assert_eq!(
        dom::document().expect("document").active_element().map(|el| el.id()),
        Some("searchQuery".to_string())
    );
}

#[wasm_bindgen_test]
fn digits_report_the_charset_message() {
    let validator = build_form_fixture();
    query_input().set_value("abc123");

    validator.submit();

    assert_eq!(
        error_text(),
        "Por favor usa solo letras, espacios y signos de puntuación básicos"
    );
}

#[wasm_bindgen_test]
fn valid_query_shows_a_transient_success_banner() {
    let validator = build_form_fixture();
    query_input().set_value("valid query");

    validator.submit();

    let doc = dom::document().expect("document");
    let input = query_input();
    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("false"));

    let banner = doc
        .query_selector(".search-form > .alert.alert-success")
        .expect("query banner")
        .expect("banner inserted before the form content");
    assert_eq!(banner.get_attribute("role").as_deref(), Some("status"));
    assert!(
        banner
            .text_content()
            .unwrap_or_default()
            .contains("Buscando \"valid query\"...")
    );
}

#[wasm_bindgen_test]
async fn success_banner_goes_away_after_three_seconds() {
    let validator = build_form_fixture();
    query_input().set_value("otro libro");
    validator.submit();

    dom::sleep_ms(3_200).await.expect("sleep");
    assert!(
        dom::document()
            .expect("document")
            .query_selector(".alert.alert-success")
            .expect("query banner")
            .is_none()
    );
}

#[wasm_bindgen_test]
fn resubmission_clears_the_previous_error() {
    let validator = build_form_fixture();
    let input = query_input();

    input.set_value("a");
    validator.submit();
    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));

    input.set_value("valid query");
    validator.submit();
    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("false"));
    let display = dom::document()
        .and_then(|doc| doc.get_element_by_id("searchError"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.style().get_property_value("display").unwrap_or_default())
        .unwrap_or_default();
    assert_eq!(display, "none");
}

#[wasm_bindgen_test]
fn submit_event_is_intercepted() {
    let _validator = build_form_fixture();
    query_input().set_value("a");

    let form = dom::document()
        .expect("document")
        .query_selector(".search-form")
        .expect("query form")
        .expect("form exists");
    let event = Event::new("submit").expect("submit event");
    form.dispatch_event(&event).expect("dispatch");

    assert_eq!(
        error_text(),
        "Por favor ingresa al menos 2 caracteres para buscar"
    );
}
