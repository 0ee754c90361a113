//! Value types describing the text-entry target a virtual keyboard is attached to.

/// Input-method hints requested by the focused text-entry target.
pub mod hints;
/// Locale and language identifiers.
pub mod locale;
/// Character-composition schemes offered by the input engine.
pub mod mode;

pub use hints::InputMethodHints;
pub use locale::{Language, Locale, LocaleError};
pub use mode::InputMode;
