//! Sentence-start capitalization.

use crate::ShiftHandler;

/// Returns true if the character typed at `cursor` starts a sentence.
///
/// Looks at `surrounding[..cursor]` (in chars) with surrounding whitespace
/// trimmed: an empty prefix or one ending in a sentence-ending character
/// starts a sentence.
pub fn starts_sentence(surrounding: &str, cursor: usize, sentence_ending_characters: &str) -> bool {
	if cursor == 0 {
		return true;
	}
	let end = surrounding.char_indices().nth(cursor).map_or(surrounding.len(), |(i, _)| i);
	match surrounding[..end].trim().chars().next_back() {
		None => true,
		Some(last) => sentence_ending_characters.contains(last),
	}
}

impl ShiftHandler {
	/// Recomputes the shift flag from the text before the cursor.
	///
	/// Caps lock always wins. Composition in progress and disabled
	/// auto-capitalization both force shift off.
	pub fn auto_capitalize(&mut self) {
		if self.state.caps_lock {
			return;
		}
		if !self.policy.auto_capitalization_enabled || !self.context.preedit_text().is_empty() {
			self.set_shift(false);
			return;
		}
		let prefer_lower_case = self.context.input_method_hints().prefers_lowercase();
		let cursor = self.context.cursor_position();
		let capitalize = cursor == 0
			|| starts_sentence(&self.context.surrounding_text(), cursor, &self.sentence_ending_characters);
		self.set_shift(capitalize && !prefer_lower_case);
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::starts_sentence;
	use crate::config::DEFAULT_SENTENCE_ENDING_CHARACTERS as ENDINGS;

	#[rstest]
	#[case("Hello. ", 7, true)]
	#[case("Hello ", 6, false)]
	#[case("Hello", 5, false)]
	#[case("Really?", 7, true)]
	#[case("¿Qué", 1, true)]
	#[case("   ", 3, true)]
	#[case("Hi.\n\t ", 6, true)]
	#[case("Done. next", 6, true)]
	#[case("Done. next", 10, false)]
	#[case("Hello. ", 99, true)]
	#[case("Hello", 0, true)]
	#[case("", 4, true)]
	#[case("e.g, ", 5, false)]
	#[case("日本語。", 4, false)]
	fn sentence_starts(#[case] text: &str, #[case] cursor: usize, #[case] expected: bool) {
		assert_eq!(starts_sentence(text, cursor, ENDINGS), expected);
	}

	#[test]
	fn cursor_counts_chars_not_bytes() {
		assert!(starts_sentence("¡Olé! más", 6, ENDINGS));
		assert!(!starts_sentence("¡Olé! más", 8, ENDINGS));
	}

	#[test]
	fn custom_endings() {
		assert!(starts_sentence("日本語。", 4, "。"));
		assert!(!starts_sentence("Hello. ", 7, "!"));
		assert!(!starts_sentence("Hello. ", 7, ""));
	}

	proptest! {
		#[test]
		fn text_after_cursor_is_ignored(prefix in "\\PC{0,12}", suffix in "\\PC{0,12}") {
			let cursor = prefix.chars().count();
			let joined = format!("{prefix}{suffix}");
			prop_assert_eq!(starts_sentence(&joined, cursor, ENDINGS), starts_sentence(&prefix, cursor, ENDINGS));
		}

		#[test]
		fn trailing_whitespace_is_ignored(prefix in "[a-zA-Z.!? ]{0,12}", pad in "[ \t\n]{0,4}") {
			let padded = format!("{prefix}{pad}");
			prop_assert_eq!(
				starts_sentence(&padded, padded.chars().count(), ENDINGS),
				starts_sentence(&prefix, prefix.chars().count(), ENDINGS)
			);
		}
	}
}
