use std::cell::RefCell;

use biblioteca_core::announce::{Announcement, Politeness};
use wasm_bindgen::JsValue;

use crate::dom;
use crate::timers::TransientNode;

/// Shared live-region factory for screen-reader announcements.
///
/// Each announcement becomes its own `sr-only` node appended to `<body>`
/// and removed on its own timer, so overlapping announcements never clobber
/// each other. Fired removal handles are pruned on the next announcement;
/// dropping the announcer removes any nodes still pending.
#[derive(Default)]
pub struct Announcer {
    pending: RefCell<Vec<TransientNode>>,
}

impl Announcer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `announcement` to assistive technology. Failures only mean the
    /// announcement is not made; they are logged and otherwise ignored.
    pub fn announce(&self, announcement: &Announcement) {
        if let Err(err) = self.push_live_region(announcement) {
            log::warn!(
                "announcement dropped: {}",
                dom::js_error_message(&err)
            );
        }
    }

    fn push_live_region(&self, announcement: &Announcement) -> Result<(), JsValue> {
        let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let body = doc
            .body()
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

        let node = doc.create_element("div")?;
        node.set_attribute("aria-live", announcement.politeness.aria_live())?;
        if announcement.politeness == Politeness::Polite {
            node.set_attribute("aria-atomic", "true")?;
        }
        node.set_class_name("sr-only");
        node.set_text_content(Some(&announcement.text));
        body.append_child(&node)?;

        let guard = TransientNode::remove_after(node, announcement.ttl_ms)?;
        let mut pending = self.pending.borrow_mut();
        pending.retain(|entry| !entry.expired());
        pending.push(guard);
        Ok(())
    }
}
