use std::cell::Cell;
use std::rc::Rc;

use biblioteca_core::announce::Announcement;
use biblioteca_core::theme::{self, Theme};
use web_sys::Element;

use crate::announcer::Announcer;
use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;
use crate::prefs;

/// Owns the binary light/dark theme: applies it to the page, persists user
/// toggles, keeps the toggle control labelled with the *next* action and
/// announces each change.
pub struct ThemeManager {
    inner: Rc<Inner>,
    _click: EventListenerHandle,
}

struct Inner {
    current: Cell<Theme>,
    toggle: Element,
    icon: Element,
    text: Element,
    announcer: Rc<Announcer>,
}

impl ThemeManager {
    /// Wires the `#themeToggle` control. Initial state is the persisted
    /// preference, falling back to the system color-scheme.
    ///
    /// # Errors
    /// Fails when the document or any of the toggle's elements is missing.
    pub fn init(announcer: Rc<Announcer>) -> Result<Self, InitError> {
        let doc = dom::document().ok_or(InitError::NoDocument)?;
        let toggle = doc
            .get_element_by_id("themeToggle")
            .ok_or(InitError::MissingElement("#themeToggle"))?;
        let icon = doc
            .get_element_by_id("themeIcon")
            .ok_or(InitError::MissingElement("#themeIcon"))?;
        let text = doc
            .get_element_by_id("themeText")
            .ok_or(InitError::MissingElement("#themeText"))?;

        let system_dark = prefs::media_matches(prefs::DARK_SCHEME_QUERY);
        let initial = theme::initial_theme(dom::stored_theme(), system_dark);

        let inner = Rc::new(Inner {
            current: Cell::new(initial),
            toggle: toggle.clone(),
            icon,
            text,
            announcer,
        });
        inner.apply(initial);

        let handler = Rc::clone(&inner);
        let click = EventListenerHandle::listen(&toggle, "click", move |_| handler.toggle())?;

        Ok(Self {
            inner,
            _click: click,
        })
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.inner.current.get()
    }

    /// Flip the theme exactly as a click on the toggle control would.
    pub fn toggle(&self) {
        self.inner.toggle();
    }
}

impl Inner {
    fn toggle(&self) {
        let next = self.current.get().flipped();
        self.current.set(next);

        // No storage just means the preference will not survive a reload.
        if let Some(storage) = dom::local_storage()
            && storage.set_item(theme::STORAGE_KEY, next.as_str()).is_err()
        {
            log::warn!("theme preference not persisted");
        }

        self.apply(next);
        self.announcer
            .announce(&Announcement::routine(theme::changed_announcement(next)));
    }

    fn apply(&self, active: Theme) {
        dom::set_theme_attribute(active);
        let view = theme::button_view(active);
        self.icon.set_text_content(Some(view.icon));
        self.text.set_text_content(Some(view.text));
        let _ = self.toggle.set_attribute("aria-label", view.aria_label);
    }
}
