//! Shift handler owning the shift/caps-lock state and its policy flags.

use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};
use vkb_primitives::Locale;

use crate::config::{DEFAULT_SENTENCE_ENDING_CHARACTERS, ShiftConfig};
use crate::sources::{Collaborators, InputContext, InputModeSource, TimingSource, VisibilitySource};
use crate::types::{ContextEvent, PolicyFlags, Reaction, ShiftEvent, ShiftState};

/// Decides whether the next typed character is upper case.
///
/// Reacts to [`ContextEvent`]s from its collaborators and publishes a
/// [`ShiftEvent`] for every observable value that actually changed. All
/// operations are synchronous; invalid or missing context degrades to a
/// silent no-op.
pub struct ShiftHandler {
	pub(crate) context: Rc<dyn InputContext>,
	pub(crate) input_modes: Rc<dyn InputModeSource>,
	pub(crate) visibility: Rc<dyn VisibilitySource>,
	pub(crate) timing: Rc<dyn TimingSource>,
	pub(crate) sentence_ending_characters: String,
	pub(crate) state: ShiftState,
	pub(crate) policy: PolicyFlags,
	/// Set by every effective [`set_shift`](Self::set_shift); cleared only by
	/// the double-tap toggle branch.
	pub(crate) shift_changed: bool,
	pub(crate) reset_when_visible: bool,
	pub(crate) locale: Locale,
	pub(crate) last_toggle: Option<Instant>,
	subscribers: Vec<mpsc::UnboundedSender<ShiftEvent>>,
}

impl fmt::Debug for ShiftHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ShiftHandler")
			.field("state", &self.state)
			.field("policy", &self.policy)
			.field("shift_changed", &self.shift_changed)
			.field("reset_when_visible", &self.reset_when_visible)
			.field("locale", &self.locale)
			.field("last_toggle", &self.last_toggle)
			.finish_non_exhaustive()
	}
}

impl ShiftHandler {
	/// Creates a handler with both flags and both policies off, sampling the
	/// context's locale once.
	pub fn new(collaborators: Collaborators) -> Self {
		let Collaborators {
			context,
			input_modes,
			visibility,
			timing,
		} = collaborators;
		let locale = parse_locale(&context.locale());
		Self {
			context,
			input_modes,
			visibility,
			timing,
			sentence_ending_characters: DEFAULT_SENTENCE_ENDING_CHARACTERS.to_string(),
			state: ShiftState::default(),
			policy: PolicyFlags::default(),
			shift_changed: false,
			reset_when_visible: false,
			locale,
			last_toggle: None,
			subscribers: Vec::new(),
		}
	}

	/// Creates a handler using the configured sentence-ending characters.
	///
	/// The configured interval is not applied here; pass
	/// [`ShiftConfig::timing`] as the timing collaborator for that.
	pub fn with_config(collaborators: Collaborators, config: &ShiftConfig) -> Self {
		let mut handler = Self::new(collaborators);
		handler.sentence_ending_characters.clone_from(&config.sentence_ending_characters);
		handler
	}

	/// Returns a receiver for change notifications.
	///
	/// Events are queued without bound until drained with `try_recv`.
	/// Dropping the receiver unsubscribes.
	pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ShiftEvent> {
		let (tx, rx) = mpsc::unbounded_channel();
		self.subscribers.push(tx);
		rx
	}

	fn publish(&mut self, event: ShiftEvent) {
		trace!(?event, "shift event");
		self.subscribers.retain(|tx| tx.send(event).is_ok());
	}

	/// Characters after which the next letter is capitalized.
	pub fn sentence_ending_characters(&self) -> &str {
		&self.sentence_ending_characters
	}

	/// Replaces the sentence-ending characters and re-evaluates the shift flag.
	pub fn set_sentence_ending_characters(&mut self, value: impl Into<String>) {
		let value = value.into();
		if self.sentence_ending_characters != value {
			self.sentence_ending_characters = value;
			self.auto_capitalize();
			self.publish(ShiftEvent::SentenceEndingCharactersChanged);
		}
	}

	/// Returns true if text-context changes drive the shift flag.
	pub fn auto_capitalization_enabled(&self) -> bool {
		self.policy.auto_capitalization_enabled
	}

	/// Returns true if [`toggle_shift`](Self::toggle_shift) is permitted.
	pub fn toggle_shift_enabled(&self) -> bool {
		self.policy.toggle_shift_enabled
	}

	pub fn shift(&self) -> bool {
		self.state.shift
	}

	pub fn caps_lock(&self) -> bool {
		self.state.caps_lock
	}

	/// Returns `shift || caps_lock`.
	pub fn uppercase(&self) -> bool {
		self.state.uppercase()
	}

	/// Returns a snapshot of both flags.
	pub fn state(&self) -> ShiftState {
		self.state
	}

	/// Returns a snapshot of the policy flags.
	pub fn policy(&self) -> PolicyFlags {
		self.policy
	}

	/// Returns the locale sampled from the context.
	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	/// Sets the shift flag.
	///
	/// `UppercaseChanged` is only published while caps lock is off, since
	/// caps lock otherwise holds `uppercase` at true.
	pub fn set_shift(&mut self, enable: bool) {
		if self.state.shift != enable {
			self.state.shift = enable;
			self.shift_changed = true;
			self.publish(ShiftEvent::ShiftChanged(enable));
			if !self.state.caps_lock {
				self.publish(ShiftEvent::UppercaseChanged(enable));
			}
		}
	}

	/// Sets the caps-lock flag. Mirrors [`set_shift`](Self::set_shift).
	pub fn set_caps_lock(&mut self, enable: bool) {
		if self.state.caps_lock != enable {
			self.state.caps_lock = enable;
			self.publish(ShiftEvent::CapsLockChanged(enable));
			if !self.state.shift {
				self.publish(ShiftEvent::UppercaseChanged(enable));
			}
		}
	}

	pub(crate) fn set_auto_capitalization_enabled(&mut self, enabled: bool) {
		if self.policy.auto_capitalization_enabled != enabled {
			self.policy.auto_capitalization_enabled = enabled;
			self.publish(ShiftEvent::AutoCapitalizationEnabledChanged(enabled));
		}
	}

	pub(crate) fn set_toggle_shift_enabled(&mut self, enabled: bool) {
		if self.policy.toggle_shift_enabled != enabled {
			self.policy.toggle_shift_enabled = enabled;
			self.publish(ShiftEvent::ToggleShiftEnabledChanged(enabled));
		}
	}

	/// Discards the pending double-tap window without touching the flags.
	pub fn clear_toggle_shift_timer(&mut self) {
		self.last_toggle = None;
	}

	/// Dispatches a collaborator notification to its registered reaction.
	pub fn handle_event(&mut self, event: ContextEvent) {
		match event.reaction() {
			Reaction::Restart => self.restart(),
			Reaction::AutoCapitalize => self.auto_capitalize(),
			Reaction::ResampleLocale => {
				self.locale = parse_locale(&self.context.locale());
				self.restart();
			}
			Reaction::HonorDeferredReset => self.visibility_changed(),
		}
	}

	/// Re-resolves policy, or defers until the keyboard is shown.
	///
	/// Any number of restarts while hidden coalesce into one reset.
	pub fn restart(&mut self) {
		if !self.visibility.is_visible() {
			debug!("keyboard hidden, deferring reset");
			self.reset_when_visible = true;
			return;
		}
		self.reset();
	}

	fn visibility_changed(&mut self) {
		if !self.reset_when_visible {
			return;
		}
		if self.visibility.is_visible() {
			self.reset_when_visible = false;
			self.reset();
		}
	}
}

fn parse_locale(tag: &str) -> Locale {
	Locale::parse(tag).unwrap_or_else(|err| {
		warn!(tag, %err, "unparsable locale, using default");
		Locale::default()
	})
}
