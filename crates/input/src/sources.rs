//! Read-only collaborator interfaces consumed by the shift handler.
//!
//! The handler only queries these on demand. Hosts keep their own `Rc` to each
//! source and raise [`ContextEvent`](crate::ContextEvent)s when values change.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use vkb_primitives::{InputMethodHints, InputMode};

/// Platform default for the double-activation interval.
pub const DEFAULT_DOUBLE_ACTIVATION_INTERVAL: Duration = Duration::from_millis(400);

/// The focused text-entry target and the text around its cursor.
pub trait InputContext {
	/// Returns true if a text-entry target is attached.
	fn has_input_item(&self) -> bool;
	/// Hints declared by the target.
	fn input_method_hints(&self) -> InputMethodHints;
	/// In-progress composition text, empty when nothing is being composed.
	fn preedit_text(&self) -> String;
	/// Committed text around the cursor.
	fn surrounding_text(&self) -> String;
	/// Cursor offset into [`surrounding_text`](Self::surrounding_text), in chars.
	fn cursor_position(&self) -> usize;
	/// Locale tag, e.g. `en_US`.
	fn locale(&self) -> String;
}

/// The input engine's active input mode.
pub trait InputModeSource {
	fn input_mode(&self) -> InputMode;
}

/// Whether the keyboard surface is shown.
pub trait VisibilitySource {
	fn is_visible(&self) -> bool;
}

/// Monotonic clock plus the platform double-activation threshold.
pub trait TimingSource {
	/// Maximum gap between two activations that still counts as a double tap.
	fn double_activation_interval(&self) -> Duration;
	/// Current monotonic time.
	fn now(&self) -> Instant;
}

impl InputModeSource for Cell<InputMode> {
	fn input_mode(&self) -> InputMode {
		self.get()
	}
}

impl VisibilitySource for Cell<bool> {
	fn is_visible(&self) -> bool {
		self.get()
	}
}

/// [`TimingSource`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTiming {
	interval: Duration,
}

impl SystemTiming {
	/// Creates a system clock with the given double-activation interval.
	pub const fn new(interval: Duration) -> Self {
		Self { interval }
	}
}

impl Default for SystemTiming {
	fn default() -> Self {
		Self::new(DEFAULT_DOUBLE_ACTIVATION_INTERVAL)
	}
}

impl TimingSource for SystemTiming {
	fn double_activation_interval(&self) -> Duration {
		self.interval
	}

	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// The four collaborators a [`ShiftHandler`](crate::ShiftHandler) is wired to.
#[derive(Clone)]
pub struct Collaborators {
	pub context: Rc<dyn InputContext>,
	pub input_modes: Rc<dyn InputModeSource>,
	pub visibility: Rc<dyn VisibilitySource>,
	pub timing: Rc<dyn TimingSource>,
}
