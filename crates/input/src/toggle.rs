//! Manual shift key handling with double-tap-to-lock.

use tracing::debug;
use vkb_primitives::InputMethodHints;

use crate::ShiftHandler;
use crate::filters;

/// How a shift key press is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToggleBranch {
	/// Caseless languages: flip shift, never lock.
	ManualLanguage,
	/// Caps lock is a plain on/off switch with shift following it.
	BinarySwitch,
	/// Single tap flips shift, a quick second tap locks caps.
	DoubleTap,
}

impl ShiftHandler {
	pub(crate) fn toggle_branch(&self) -> ToggleBranch {
		if filters::is_manual_shift_language(self.locale.language()) {
			ToggleBranch::ManualLanguage
		} else if self.context.input_method_hints().contains(InputMethodHints::NO_AUTO_UPPERCASE)
			|| filters::is_manual_caps_mode(self.input_modes.input_mode())
		{
			ToggleBranch::BinarySwitch
		} else {
			ToggleBranch::DoubleTap
		}
	}

	/// Handles one press of the shift key.
	///
	/// Does nothing while toggling is disabled.
	pub fn toggle_shift(&mut self) {
		if !self.policy.toggle_shift_enabled {
			return;
		}
		let branch = self.toggle_branch();
		debug!(?branch, state = ?self.state, "toggle shift");
		match branch {
			ToggleBranch::ManualLanguage => {
				self.set_caps_lock(false);
				self.set_shift(!self.state.shift);
			}
			ToggleBranch::BinarySwitch => {
				let caps_lock = !self.state.caps_lock;
				self.set_caps_lock(caps_lock);
				self.set_shift(caps_lock);
			}
			ToggleBranch::DoubleTap => self.toggle_double_tap(),
		}
	}

	fn toggle_double_tap(&mut self) {
		// Evaluated with caps lock on, so the lock is always released here.
		if self.state.caps_lock {
			self.set_caps_lock(!self.state.caps_lock && self.state.shift && !self.shift_changed);
		}

		let now = self.timing.now();
		let interval = self.timing.double_activation_interval();
		match self.last_toggle.map(|at| now.saturating_duration_since(at)) {
			Some(elapsed) if elapsed <= interval => {
				// A tap landing exactly on the interval neither locks nor reopens the window.
				if elapsed < interval && !self.state.caps_lock {
					let lock = self.state.shift && !self.shift_changed;
					debug!(?elapsed, lock, "second tap inside double-tap window");
					self.set_caps_lock(lock);
				}
			}
			_ => self.last_toggle = Some(now),
		}

		self.set_shift(self.state.caps_lock || !self.state.shift);
		self.shift_changed = false;
	}
}
