//! Descriptions of screen-reader announcements. The web layer turns these
//! into transient live-region nodes; keeping the description a plain value
//! lets announcement policy be tested without a DOM.

/// Lifetime of a routine (polite) announcement node.
pub const ROUTINE_TTL_MS: i32 = 1_000;

/// Lifetime of an alert (assertive) announcement node.
pub const ALERT_TTL_MS: i32 = 3_000;

/// Delay before the startup-complete announcement is made.
pub const PAGE_READY_DELAY_MS: i32 = 1_000;

/// Announced once the page has finished initializing.
pub const PAGE_READY: &str =
    "Página cargada completamente. Biblioteca Digital lista para usar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

impl Politeness {
    /// Value for the live region's `aria-live` attribute.
    #[must_use]
    pub const fn aria_live(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
    pub ttl_ms: i32,
}

impl Announcement {
    /// A polite announcement removed after one second.
    #[must_use]
    pub fn routine(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Polite,
            ttl_ms: ROUTINE_TTL_MS,
        }
    }

    /// An assertive announcement removed after three seconds, used for
    /// form validation errors.
    #[must_use]
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Assertive,
            ttl_ms: ALERT_TTL_MS,
        }
    }
}
