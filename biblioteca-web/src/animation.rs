use std::cell::Cell;
use std::rc::Rc;

use biblioteca_core::announce::Announcement;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::announcer::Announcer;
use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;

/// Ctrl+Alt+P suspends or resumes CSS-transition-driven motion by setting
/// the shared `--transition` variable to `none`. The paused flag lives only
/// in this component and resets on reload.
pub struct AnimationToggle {
    inner: Rc<Inner>,
    _keydown: EventListenerHandle,
}

struct Inner {
    paused: Cell<bool>,
    announcer: Rc<Announcer>,
}

impl AnimationToggle {
    /// # Errors
    /// Fails when the document is unavailable.
    pub fn init(announcer: Rc<Announcer>) -> Result<Self, InitError> {
        let doc = dom::document().ok_or(InitError::NoDocument)?;

        let inner = Rc::new(Inner {
            paused: Cell::new(false),
            announcer,
        });

        let handler = Rc::clone(&inner);
        let keydown = EventListenerHandle::listen(&doc, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>()
                && key_event.ctrl_key()
                && key_event.alt_key()
                && key_event.key() == "p"
            {
                handler.toggle();
            }
        })?;

        Ok(Self {
            inner,
            _keydown: keydown,
        })
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.inner.paused.get()
    }

    /// Same effect as pressing the shortcut.
    pub fn toggle(&self) {
        self.inner.toggle();
    }
}

impl Inner {
    fn toggle(&self) {
        let paused = !self.paused.get();
        self.paused.set(paused);
        dom::set_transition_disabled(paused);

        let text = if paused {
            "Animaciones pausadas"
        } else {
            "Animaciones reanudadas"
        };
        self.announcer.announce(&Announcement::routine(text));
    }
}
