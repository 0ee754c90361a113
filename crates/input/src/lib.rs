//! Shift and caps-lock state machine for a virtual keyboard.
//!
//! * [`ShiftHandler`]: owns the shift/caps-lock flags, resolves policy from
//!   input-method hints, input mode and locale, auto-capitalizes at sentence
//!   starts and turns quick double taps into caps lock
//! * [`ContextEvent`] / [`ShiftEvent`]: notifications in and out
//! * [`sources`]: the read-only collaborators a host provides

pub mod autocap;
pub mod config;
pub mod filters;
pub mod handler;
pub mod policy;
pub mod sources;
pub mod toggle;
pub mod types;

pub use autocap::starts_sentence;
pub use config::{ConfigError, ShiftConfig};
pub use handler::ShiftHandler;
pub use sources::{Collaborators, InputContext, InputModeSource, SystemTiming, TimingSource, VisibilitySource};
pub use types::{ContextEvent, PolicyFlags, Reaction, ShiftEvent, ShiftState};
pub use vkb_primitives::{InputMethodHints, InputMode, Language, Locale};
