use biblioteca_core::announce::PAGE_READY;
use biblioteca_web::app::App;
use biblioteca_web::dom;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn build_page_fixture() {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(
        "<div class=\"container\">\
           <button id=\"themeToggle\">\
             <span id=\"themeIcon\"></span><span id=\"themeText\"></span>\
           </button>\
           <form class=\"search-form\">\
             <input type=\"search\" id=\"searchQuery\" />\
             <div id=\"searchError\" style=\"display:none\"></div>\
           </form>\
           <div class=\"book-card\">\
             <h3 class=\"book-title\">Rayuela</h3>\
             <p class=\"book-author\">Por Julio Cortázar</p>\
             <button class=\"btn\">Ver</button>\
           </div>\
         </div>",
    );
    if let Some(storage) = dom::local_storage() {
        storage.remove_item("theme").expect("clear stored theme");
    }
}

fn shortcut() -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key("p");
    init.set_ctrl_key(true);
    init.set_alt_key(true);
    init.set_bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

#[wasm_bindgen_test]
fn boot_wires_every_component_present_on_the_page() {
    build_page_fixture();
    let app = App::boot();
    assert!(app.theme().is_some());
    assert!(app.form().is_some());
    assert!(app.animation().is_some());
}

#[wasm_bindgen_test]
fn animation_shortcut_pauses_and_resumes_motion() {
    build_page_fixture();
    let app = App::boot();
    let animation = app.animation().expect("animation toggle");
    assert!(!animation.paused());

    let doc = dom::document().expect("document");
    doc.dispatch_event(&shortcut()).expect("dispatch");
    assert!(animation.paused());
    let root = dom::root_element().expect("root");
    assert_eq!(
        root.style().get_property_value("--transition").expect("read var"),
        "none"
    );

    doc.dispatch_event(&shortcut()).expect("dispatch");
    assert!(!animation.paused());
    assert!(
        root.style()
            .get_property_value("--transition")
            .expect("read var")
            .is_empty()
    );
}

#[wasm_bindgen_test]
async fn page_ready_is_announced_then_cleaned_up() {
    build_page_fixture();
    let _app = App::boot();

    dom::sleep_ms(1_300).await.expect("sleep");
    let doc = dom::document().expect("document");
    let announced = doc
        .query_selector_all("body > div.sr-only")
        .expect("query live regions");
    let mut found = false;
    for index in 0..announced.length() {
        if announced
            .item(index)
            .and_then(|node| node.text_content())
            .is_some_and(|text| text == PAGE_READY)
        {
            found = true;
        }
    }
    assert!(found, "page-ready announcement should be live at 1.3s");

    dom::sleep_ms(1_200).await.expect("sleep");
    assert_eq!(
        doc.query_selector_all("body > div.sr-only").expect("query").length(),
        0
    );
}

#[wasm_bindgen_test]
fn theme_seeds_from_the_system_when_nothing_is_stored() {
    build_page_fixture();
    let app = App::boot();
    let manager = app.theme().expect("theme manager");

    let system_dark = dom::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|list| list.matches());
    let expected = if system_dark { "dark" } else { "light" };
    assert_eq!(manager.current().as_str(), expected);
    assert_eq!(
        dom::root_element().and_then(|root| root.get_attribute("data-theme")).as_deref(),
        Some(expected)
    );
}
