//! Fake collaborators for driving a [`ShiftHandler`] from tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use vkb_input::{
	Collaborators, ContextEvent, InputContext, InputMethodHints, InputMode, ShiftEvent, ShiftHandler, TimingSource,
};

pub const INTERVAL: Duration = Duration::from_millis(400);

/// Text-entry target with settable fields.
#[derive(Debug)]
pub struct FakeContext {
	pub has_item: Cell<bool>,
	pub hints: Cell<InputMethodHints>,
	pub preedit: RefCell<String>,
	pub surrounding: RefCell<String>,
	pub cursor: Cell<usize>,
	pub locale: RefCell<String>,
}

impl FakeContext {
	pub fn new(locale: &str) -> Self {
		Self {
			has_item: Cell::new(true),
			hints: Cell::new(InputMethodHints::empty()),
			preedit: RefCell::new(String::new()),
			surrounding: RefCell::new(String::new()),
			cursor: Cell::new(0),
			locale: RefCell::new(locale.to_string()),
		}
	}
}

impl InputContext for FakeContext {
	fn has_input_item(&self) -> bool {
		self.has_item.get()
	}

	fn input_method_hints(&self) -> InputMethodHints {
		self.hints.get()
	}

	fn preedit_text(&self) -> String {
		self.preedit.borrow().clone()
	}

	fn surrounding_text(&self) -> String {
		self.surrounding.borrow().clone()
	}

	fn cursor_position(&self) -> usize {
		self.cursor.get()
	}

	fn locale(&self) -> String {
		self.locale.borrow().clone()
	}
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FakeClock {
	base: Instant,
	offset: Cell<Duration>,
}

impl FakeClock {
	pub fn new() -> Self {
		Self {
			base: Instant::now(),
			offset: Cell::new(Duration::ZERO),
		}
	}

	pub fn advance(&self, by: Duration) {
		self.offset.set(self.offset.get() + by);
	}
}

impl TimingSource for FakeClock {
	fn double_activation_interval(&self) -> Duration {
		INTERVAL
	}

	fn now(&self) -> Instant {
		self.base + self.offset.get()
	}
}

/// A handler wired to fakes, plus a subscription to its events.
pub struct Harness {
	pub context: Rc<FakeContext>,
	pub mode: Rc<Cell<InputMode>>,
	pub visible: Rc<Cell<bool>>,
	pub clock: Rc<FakeClock>,
	pub handler: ShiftHandler,
	pub events: UnboundedReceiver<ShiftEvent>,
}

impl Harness {
	/// Visible keyboard, attached `en_US` target, Latin mode, empty text.
	pub fn new() -> Self {
		Self::with(InputMode::Latin, "en_US")
	}

	pub fn with(mode: InputMode, locale: &str) -> Self {
		let context = Rc::new(FakeContext::new(locale));
		let mode = Rc::new(Cell::new(mode));
		let visible = Rc::new(Cell::new(true));
		let clock = Rc::new(FakeClock::new());
		let mut handler = ShiftHandler::new(Collaborators {
			context: context.clone(),
			input_modes: mode.clone(),
			visibility: visible.clone(),
			timing: clock.clone(),
		});
		let events = handler.subscribe();
		Self {
			context,
			mode,
			visible,
			clock,
			handler,
			events,
		}
	}

	/// Resets and discards the resulting events.
	pub fn ready(mut self) -> Self {
		self.handler.reset();
		self.drain();
		self
	}

	/// Replaces the surrounding text and notifies the handler.
	pub fn type_text(&mut self, text: &str, cursor: usize) {
		*self.context.surrounding.borrow_mut() = text.to_string();
		self.handler.handle_event(ContextEvent::SurroundingTextChanged);
		self.context.cursor.set(cursor);
		self.handler.handle_event(ContextEvent::CursorPositionChanged);
	}

	pub fn set_locale(&mut self, tag: &str) {
		*self.context.locale.borrow_mut() = tag.to_string();
		self.handler.handle_event(ContextEvent::LocaleChanged);
	}

	pub fn set_mode(&mut self, mode: InputMode) {
		self.mode.set(mode);
		self.handler.handle_event(ContextEvent::InputModeChanged);
	}

	pub fn set_hints(&mut self, hints: InputMethodHints) {
		self.context.hints.set(hints);
		self.handler.handle_event(ContextEvent::InputMethodHintsChanged);
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible.set(visible);
		self.handler.handle_event(ContextEvent::VisibleChanged);
	}

	/// Taps shift after letting `gap` elapse.
	pub fn tap_after(&mut self, gap: Duration) {
		self.clock.advance(gap);
		self.handler.toggle_shift();
	}

	pub fn drain(&mut self) -> Vec<ShiftEvent> {
		let mut out = Vec::new();
		while let Ok(event) = self.events.try_recv() {
			out.push(event);
		}
		out
	}
}
