//! Policy resolution from hints, input mode and locale.

use tracing::debug;
use vkb_primitives::{InputMethodHints, InputMode, Language};

use crate::ShiftHandler;
use crate::filters;

/// Policy derived for one text-entry target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedPolicy {
	pub prefer_upper_case: bool,
	pub auto_capitalization_enabled: bool,
	pub toggle_shift_enabled: bool,
}

impl ResolvedPolicy {
	/// Derives policy from hints, then applies the language and mode overrides.
	///
	/// The manual-shift override wins over the all-caps override.
	pub fn resolve(hints: InputMethodHints, mode: InputMode, language: &Language) -> Self {
		if filters::is_manual_shift_language(language) || filters::is_manual_caps_mode(mode) {
			return Self {
				prefer_upper_case: false,
				auto_capitalization_enabled: false,
				toggle_shift_enabled: true,
			};
		}
		if filters::is_all_caps_mode(mode) {
			return Self {
				prefer_upper_case: true,
				auto_capitalization_enabled: false,
				toggle_shift_enabled: false,
			};
		}
		Self {
			prefer_upper_case: hints.prefers_uppercase(),
			auto_capitalization_enabled: !hints.blocks_auto_uppercase() && !filters::is_no_auto_uppercase_mode(mode),
			toggle_shift_enabled: !hints.is_single_case(),
		}
	}
}

impl ShiftHandler {
	/// Resolves policy for the attached target and re-seeds the flags.
	///
	/// Does nothing when no target is attached.
	pub fn reset(&mut self) {
		if !self.context.has_input_item() {
			return;
		}
		let hints = self.context.input_method_hints();
		let mode = self.input_modes.input_mode();
		let policy = ResolvedPolicy::resolve(hints, mode, self.locale.language());
		debug!(?hints, %mode, locale = %self.locale, ?policy, "resolved shift policy");

		self.set_toggle_shift_enabled(policy.toggle_shift_enabled);
		self.set_auto_capitalization_enabled(policy.auto_capitalization_enabled);
		self.set_caps_lock(policy.prefer_upper_case);
		if policy.prefer_upper_case {
			self.set_shift(true);
		} else {
			self.auto_capitalize();
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn resolve(hints: InputMethodHints, mode: InputMode, language: Language) -> (bool, bool, bool) {
		let p = ResolvedPolicy::resolve(hints, mode, &language);
		(p.prefer_upper_case, p.auto_capitalization_enabled, p.toggle_shift_enabled)
	}

	#[rstest]
	#[case(InputMethodHints::empty(), (false, true, true))]
	#[case(InputMethodHints::PREFER_UPPERCASE, (true, true, true))]
	#[case(InputMethodHints::UPPERCASE_ONLY, (true, false, false))]
	#[case(InputMethodHints::LOWERCASE_ONLY, (false, false, false))]
	#[case(InputMethodHints::NO_AUTO_UPPERCASE, (false, false, true))]
	#[case(InputMethodHints::DIGITS_ONLY, (false, false, true))]
	#[case(InputMethodHints::EMAIL_CHARACTERS_ONLY, (false, false, true))]
	#[case(InputMethodHints::PREFER_LOWERCASE, (false, true, true))]
	fn hints_alone(#[case] hints: InputMethodHints, #[case] expected: (bool, bool, bool)) {
		assert_eq!(resolve(hints, InputMode::Latin, Language::English), expected);
	}

	#[rstest]
	#[case(InputMode::Pinyin)]
	#[case(InputMode::FullwidthLatin)]
	#[case(InputMode::JapaneseHandwriting)]
	fn no_auto_uppercase_modes(#[case] mode: InputMode) {
		assert_eq!(resolve(InputMethodHints::empty(), mode, Language::English), (false, false, true));
		assert_eq!(resolve(InputMethodHints::PREFER_UPPERCASE, mode, Language::English), (true, false, true));
	}

	#[rstest]
	#[case(Language::Arabic)]
	#[case(Language::Persian)]
	#[case(Language::Hindi)]
	#[case(Language::Korean)]
	#[case(Language::Thai)]
	fn manual_shift_languages_override_hints(#[case] language: Language) {
		let hints = InputMethodHints::UPPERCASE_ONLY;
		assert_eq!(resolve(hints, InputMode::Latin, language), (false, false, true));
	}

	#[test]
	fn manual_shift_language_beats_all_caps_mode() {
		assert_eq!(resolve(InputMethodHints::empty(), InputMode::Katakana, Language::Korean), (false, false, true));
	}

	#[rstest]
	#[case(InputMode::Cangjie)]
	#[case(InputMode::Zhuyin)]
	#[case(InputMode::Hebrew)]
	fn manual_caps_modes(#[case] mode: InputMode) {
		assert_eq!(resolve(InputMethodHints::LOWERCASE_ONLY, mode, Language::English), (false, false, true));
	}

	#[rstest]
	#[case(InputMode::Hiragana)]
	#[case(InputMode::Katakana)]
	fn all_caps_modes(#[case] mode: InputMode) {
		assert_eq!(resolve(InputMethodHints::PREFER_LOWERCASE, mode, Language::Japanese), (true, false, false));
	}
}
