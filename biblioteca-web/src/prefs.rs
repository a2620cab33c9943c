use biblioteca_core::theme::{self, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Event, MediaQueryList, MediaQueryListEvent};

use crate::dom;
use crate::errors::InitError;
use crate::events::EventListenerHandle;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Seeds the active theme from the system color-scheme when no preference
/// has been persisted, keeps following system changes until one is, and
/// applies the reduced-motion override. Absent media-query support is
/// treated as "no preference".
pub struct PreferenceDetector {
    _scheme_listener: Option<EventListenerHandle>,
}

impl PreferenceDetector {
    /// # Errors
    /// Fails when the document is unavailable; every preference signal is
    /// optional.
    pub fn init() -> Result<Self, InitError> {
        if dom::document().is_none() {
            return Err(InitError::NoDocument);
        }

        if media_matches(REDUCED_MOTION_QUERY) {
            dom::set_transition_disabled(true);
        }

        let dark_scheme = match_media(DARK_SCHEME_QUERY);
        if dom::stored_theme().is_none() {
            let system_dark = dark_scheme.as_ref().is_some_and(MediaQueryList::matches);
            apply_system_theme(theme::initial_theme(None, system_dark));
        }

        let scheme_listener = match dark_scheme {
            Some(list) => Some(EventListenerHandle::listen(&list, "change", on_scheme_change)?),
            None => None,
        };

        Ok(Self {
            _scheme_listener: scheme_listener,
        })
    }
}

fn on_scheme_change(event: Event) {
    // A persisted preference is an explicit user override; stop syncing.
    if dom::stored_theme().is_some() {
        return;
    }
    let system_dark = event
        .dyn_ref::<MediaQueryListEvent>()
        .is_some_and(MediaQueryListEvent::matches);
    apply_system_theme(theme::initial_theme(None, system_dark));
}

fn apply_system_theme(active: Theme) {
    dom::set_theme_attribute(active);
}

pub(crate) fn match_media(query: &str) -> Option<MediaQueryList> {
    dom::window().and_then(|win| win.match_media(query).ok().flatten())
}

pub(crate) fn media_matches(query: &str) -> bool {
    match_media(query).is_some_and(|list| list.matches())
}
