use biblioteca_web::dom;
use biblioteca_web::errors::{FALLBACK_MESSAGE, GlobalErrorHandler};
use wasm_bindgen_test::*;
use web_sys::Event;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn uncaught_errors_surface_a_banner_in_the_container() {
    let doc = dom::document().expect("document");
    doc.body()
        .expect("body")
        .set_inner_html("<div class=\"container\"><p>contenido</p></div>");

    let _handler = GlobalErrorHandler::init().expect("init error handler");
    let win = dom::window().expect("window");
    win.dispatch_event(&Event::new("error").expect("error event"))
        .expect("dispatch");

    let banner = doc
        .query_selector(".container > .alert.alert-error")
        .expect("query banner")
        .expect("banner inserted at the top of the container");
    assert_eq!(banner.get_attribute("role").as_deref(), Some("alert"));
    assert!(
        banner
            .text_content()
            .unwrap_or_default()
            .contains(FALLBACK_MESSAGE)
    );
}

#[wasm_bindgen_test]
fn no_container_means_no_banner_and_no_crash() {
    let doc = dom::document().expect("document");
    doc.body().expect("body").set_inner_html("<main></main>");

    let _handler = GlobalErrorHandler::init().expect("init error handler");
    let win = dom::window().expect("window");
    win.dispatch_event(&Event::new("error").expect("error event"))
        .expect("dispatch");

    assert!(
        doc.query_selector(".alert.alert-error")
            .expect("query banner")
            .is_none()
    );
}
