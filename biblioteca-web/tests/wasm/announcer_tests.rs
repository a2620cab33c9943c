use biblioteca_core::announce::Announcement;
use biblioteca_web::announcer::Announcer;
use biblioteca_web::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn live_regions() -> u32 {
    dom::document()
        .expect("document")
        .query_selector_all("body > div.sr-only")
        .expect("query live regions")
        .length()
}

#[wasm_bindgen_test]
async fn routine_announcement_is_removed_within_a_second() {
    let announcer = Announcer::new();
    announcer.announce(&Announcement::routine("Tema cambiado a oscuro"));
    assert!(live_regions() >= 1);

    let doc = dom::document().expect("document");
    let node = doc
        .query_selector("body > div.sr-only")
        .expect("query")
        .expect("live region exists");
    assert_eq!(node.get_attribute("aria-live").as_deref(), Some("polite"));
    assert_eq!(node.get_attribute("aria-atomic").as_deref(), Some("true"));
    assert_eq!(node.text_content().as_deref(), Some("Tema cambiado a oscuro"));

    dom::sleep_ms(1_100).await.expect("sleep");
    assert_eq!(live_regions(), 0);
}

#[wasm_bindgen_test]
async fn alert_announcement_is_assertive_and_lives_longer() {
    let announcer = Announcer::new();
    announcer.announce(&Announcement::alert("Error en el formulario: prueba"));

    let doc = dom::document().expect("document");
    let node = doc
        .query_selector("body > div.sr-only[aria-live='assertive']")
        .expect("query")
        .expect("assertive region exists");
    assert!(node.get_attribute("aria-atomic").is_none());

    // Still present past the routine window, gone after its own.
    dom::sleep_ms(1_500).await.expect("sleep");
    assert!(
        doc.query_selector("body > div.sr-only[aria-live='assertive']")
            .expect("query")
            .is_some()
    );
    dom::sleep_ms(2_000).await.expect("sleep");
    assert!(
        doc.query_selector("body > div.sr-only[aria-live='assertive']")
            .expect("query")
            .is_none()
    );
}

#[wasm_bindgen_test]
fn dropping_the_announcer_removes_pending_nodes() {
    {
        let announcer = Announcer::new();
        announcer.announce(&Announcement::routine("uno"));
        announcer.announce(&Announcement::routine("dos"));
        assert!(live_regions() >= 2);
    }
    assert_eq!(live_regions(), 0);
}
