use std::rc::Rc;

use biblioteca_core::announce::{Announcement, PAGE_READY, PAGE_READY_DELAY_MS};

use crate::animation::AnimationToggle;
use crate::announcer::Announcer;
use crate::errors::{self, GlobalErrorHandler, InitError};
use crate::form::FormValidator;
use crate::keyboard::KeyboardNav;
use crate::prefs::PreferenceDetector;
use crate::theme::ThemeManager;
use crate::timers::Timeout;
use crate::usability::UsabilityEnhancer;

/// All page behavior, booted once and held for the page lifetime. Each
/// component is independent: one failing to wire up never stops the rest.
pub struct App {
    announcer: Rc<Announcer>,
    _prefs: Option<PreferenceDetector>,
    theme: Option<ThemeManager>,
    form: Option<FormValidator>,
    _keyboard: Option<KeyboardNav>,
    animation: Option<AnimationToggle>,
    _usability: Option<UsabilityEnhancer>,
    _errors: Option<GlobalErrorHandler>,
    _ready_timer: Option<Timeout>,
}

impl App {
    /// Initialize every component in its fixed order, then schedule the
    /// startup-complete announcement.
    #[must_use]
    pub fn boot() -> Self {
        let announcer = Rc::new(Announcer::new());

        let prefs = track("preference detector", PreferenceDetector::init());
        let theme = track("theme manager", ThemeManager::init(Rc::clone(&announcer)));
        let form = track("form validator", FormValidator::init(Rc::clone(&announcer)));
        let keyboard = track("keyboard navigation", KeyboardNav::init());
        let animation = track(
            "animation toggle",
            AnimationToggle::init(Rc::clone(&announcer)),
        );
        let usability = track("usability enhancer", UsabilityEnhancer::init());
        let error_handler = track("error handler", GlobalErrorHandler::init());

        let ready_announcer = Rc::clone(&announcer);
        let ready_timer = Timeout::schedule(PAGE_READY_DELAY_MS, move || {
            ready_announcer.announce(&Announcement::routine(PAGE_READY));
        })
        .ok();

        Self {
            announcer,
            _prefs: prefs,
            theme,
            form,
            _keyboard: keyboard,
            animation,
            _usability: usability,
            _errors: error_handler,
            _ready_timer: ready_timer,
        }
    }

    #[must_use]
    pub fn announcer(&self) -> &Rc<Announcer> {
        &self.announcer
    }

    #[must_use]
    pub fn theme(&self) -> Option<&ThemeManager> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> Option<&FormValidator> {
        self.form.as_ref()
    }

    #[must_use]
    pub fn animation(&self) -> Option<&AnimationToggle> {
        self.animation.as_ref()
    }
}

/// Missing markup only disables the component; real failures are logged
/// and surfaced through the same banner the global handler uses.
fn track<T>(name: &'static str, result: Result<T, InitError>) -> Option<T> {
    match result {
        Ok(component) => Some(component),
        Err(err) if err.is_degradation() => {
            log::warn!("{name} disabled: {err}");
            None
        }
        Err(err) => {
            log::error!("{name} failed to initialize: {err}");
            errors::show_error_banner();
            None
        }
    }
}
