/// Change notification published by [`ShiftHandler`](crate::ShiftHandler).
///
/// Each variant carries the new value of the property that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftEvent {
	/// The transient shift flag changed.
	ShiftChanged(bool),
	/// The caps-lock flag changed.
	CapsLockChanged(bool),
	/// `shift || caps_lock` changed.
	UppercaseChanged(bool),
	/// Automatic capitalization was enabled or disabled.
	AutoCapitalizationEnabledChanged(bool),
	/// Manual toggling was enabled or disabled.
	ToggleShiftEnabledChanged(bool),
	/// The sentence-ending character set was replaced.
	SentenceEndingCharactersChanged,
}

/// Notification raised by one of the handler's collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextEvent {
	/// The target's input-method hints changed.
	InputMethodHintsChanged,
	/// A different text-entry target was attached or detached.
	InputItemChanged,
	/// The input engine switched input mode.
	InputModeChanged,
	/// The pre-edit (composition) text changed.
	PreeditTextChanged,
	/// The committed text around the cursor changed.
	SurroundingTextChanged,
	/// The cursor moved.
	CursorPositionChanged,
	/// The active locale changed.
	LocaleChanged,
	/// The keyboard surface was shown or hidden.
	VisibleChanged,
}

/// What the handler does in response to a [`ContextEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
	/// Re-resolve policy, deferred while the keyboard is hidden.
	Restart,
	/// Recompute the shift flag from the text around the cursor.
	AutoCapitalize,
	/// Re-read the locale, then restart.
	ResampleLocale,
	/// Run a reset that was deferred while hidden, if any.
	HonorDeferredReset,
}

impl ContextEvent {
	/// Returns the reaction registered for this event.
	pub const fn reaction(self) -> Reaction {
		match self {
			Self::InputMethodHintsChanged | Self::InputItemChanged | Self::InputModeChanged => Reaction::Restart,
			Self::PreeditTextChanged | Self::SurroundingTextChanged | Self::CursorPositionChanged => Reaction::AutoCapitalize,
			Self::LocaleChanged => Reaction::ResampleLocale,
			Self::VisibleChanged => Reaction::HonorDeferredReset,
		}
	}
}

/// Snapshot of the shift and caps-lock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShiftState {
	pub shift: bool,
	pub caps_lock: bool,
}

impl ShiftState {
	/// Returns true if the next character renders upper case.
	pub const fn uppercase(self) -> bool {
		self.shift || self.caps_lock
	}
}

/// Policy flags resolved on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PolicyFlags {
	/// Text-context changes drive the shift flag.
	pub auto_capitalization_enabled: bool,
	/// [`toggle_shift`](crate::ShiftHandler::toggle_shift) is permitted.
	pub toggle_shift_enabled: bool,
}
