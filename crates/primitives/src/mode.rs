//! Input modes offered by the input engine.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Character-composition scheme active on the keyboard.
///
/// Names parse and display in `snake_case` (`"fullwidth_latin"`,
/// `"japanese_handwriting"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InputMode {
	/// Plain Latin letters.
	#[default]
	Latin,
	/// Digits and number punctuation.
	Numeric,
	/// Phone-number characters.
	Dialable,
	/// Mandarin phonetic input using Latin letters.
	Pinyin,
	/// Shape-based Chinese input.
	Cangjie,
	/// Bopomofo phonetic input.
	Zhuyin,
	/// Korean syllable composition.
	Hangul,
	/// Japanese hiragana.
	Hiragana,
	/// Japanese katakana.
	Katakana,
	/// Full-width Latin letters.
	FullwidthLatin,
	/// Greek alphabet.
	Greek,
	/// Cyrillic alphabet.
	Cyrillic,
	/// Arabic script.
	Arabic,
	/// Hebrew script.
	Hebrew,
	/// Chinese handwriting recognition.
	ChineseHandwriting,
	/// Japanese handwriting recognition.
	JapaneseHandwriting,
	/// Korean handwriting recognition.
	KoreanHandwriting,
	/// Thai script.
	Thai,
}

impl InputMode {
	/// Returns true for modes driven by handwriting recognition.
	pub const fn is_handwriting(self) -> bool {
		matches!(self, Self::ChineseHandwriting | Self::JapaneseHandwriting | Self::KoreanHandwriting)
	}
}
