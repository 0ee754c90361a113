bitflags::bitflags! {
	/// Hints a text-entry target gives about the input it accepts.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct InputMethodHints: u32 {
		/// Characters should be hidden, as for passwords.
		const HIDDEN_TEXT = 1 << 0;
		/// Typed text must not be stored by the input method.
		const SENSITIVE_DATA = 1 << 1;
		/// Automatic upper-casing at sentence starts is unwanted.
		const NO_AUTO_UPPERCASE = 1 << 2;
		/// Numbers are preferred but not required.
		const PREFER_NUMBERS = 1 << 3;
		/// Upper case is preferred at the start of input.
		const PREFER_UPPERCASE = 1 << 4;
		/// Lower case is preferred at sentence starts.
		const PREFER_LOWERCASE = 1 << 5;
		/// Word prediction should be disabled.
		const NO_PREDICTIVE_TEXT = 1 << 6;
		/// The target edits a date.
		const DATE = 1 << 7;
		/// The target edits a time.
		const TIME = 1 << 8;
		/// Latin characters are preferred.
		const PREFER_LATIN = 1 << 9;
		/// Multiple lines of text are accepted.
		const MULTI_LINE = 1 << 10;

		/// Only digits are accepted.
		const DIGITS_ONLY = 1 << 16;
		/// Only number input (digits, sign, decimal point) is accepted.
		const FORMATTED_NUMBERS_ONLY = 1 << 17;
		/// Only upper-case letters are accepted.
		const UPPERCASE_ONLY = 1 << 18;
		/// Only lower-case letters are accepted.
		const LOWERCASE_ONLY = 1 << 19;
		/// Only characters used in phone numbers are accepted.
		const DIALABLE_CHARACTERS_ONLY = 1 << 20;
		/// Only characters used in email addresses are accepted.
		const EMAIL_CHARACTERS_ONLY = 1 << 21;
		/// Only characters used in URLs are accepted.
		const URL_CHARACTERS_ONLY = 1 << 22;
		/// Only Latin characters are accepted.
		const LATIN_ONLY = 1 << 23;
	}
}

impl InputMethodHints {
	/// Hints asking for the keyboard to start in upper case.
	pub const UPPERCASE_PREFERENCE: Self = Self::PREFER_UPPERCASE.union(Self::UPPERCASE_ONLY);

	/// Hints that pin input to one letter case.
	pub const SINGLE_CASE: Self = Self::UPPERCASE_ONLY.union(Self::LOWERCASE_ONLY);

	/// Hints under which sentence-start capitalization never applies.
	pub const AUTO_UPPERCASE_BLOCKERS: Self = Self::NO_AUTO_UPPERCASE
		.union(Self::SINGLE_CASE)
		.union(Self::EMAIL_CHARACTERS_ONLY)
		.union(Self::URL_CHARACTERS_ONLY)
		.union(Self::DIALABLE_CHARACTERS_ONLY)
		.union(Self::FORMATTED_NUMBERS_ONLY)
		.union(Self::DIGITS_ONLY);

	/// Returns true if the target wants upper case from the start.
	pub const fn prefers_uppercase(self) -> bool {
		self.intersects(Self::UPPERCASE_PREFERENCE)
	}

	/// Returns true if the target prefers lower case at sentence starts.
	pub const fn prefers_lowercase(self) -> bool {
		self.contains(Self::PREFER_LOWERCASE)
	}

	/// Returns true if any hint rules out automatic capitalization.
	pub const fn blocks_auto_uppercase(self) -> bool {
		self.intersects(Self::AUTO_UPPERCASE_BLOCKERS)
	}

	/// Returns true if the target accepts only one letter case.
	pub const fn is_single_case(self) -> bool {
		self.intersects(Self::SINGLE_CASE)
	}
}
