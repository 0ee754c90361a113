//! Fixed language and input-mode sets that override hint-derived policy.

use vkb_primitives::{InputMode, Language};

/// Languages without letter case where shift is only toggled by hand.
pub static MANUAL_SHIFT_LANGUAGES: [Language; 5] =
	[Language::Arabic, Language::Persian, Language::Hindi, Language::Korean, Language::Thai];

/// Input modes where toggling flips caps lock as a plain on/off switch.
pub static MANUAL_CAPS_INPUT_MODES: [InputMode; 3] = [InputMode::Cangjie, InputMode::Zhuyin, InputMode::Hebrew];

/// Input modes that never auto-capitalize.
pub static NO_AUTO_UPPERCASE_INPUT_MODES: [InputMode; 7] = [
	InputMode::FullwidthLatin,
	InputMode::Pinyin,
	InputMode::Cangjie,
	InputMode::Zhuyin,
	InputMode::ChineseHandwriting,
	InputMode::JapaneseHandwriting,
	InputMode::KoreanHandwriting,
];

/// Input modes locked to upper case with toggling disabled.
pub static ALL_CAPS_INPUT_MODES: [InputMode; 2] = [InputMode::Hiragana, InputMode::Katakana];

pub(crate) fn is_manual_shift_language(language: &Language) -> bool {
	MANUAL_SHIFT_LANGUAGES.contains(language)
}

pub(crate) fn is_manual_caps_mode(mode: InputMode) -> bool {
	MANUAL_CAPS_INPUT_MODES.contains(&mode)
}

pub(crate) fn is_no_auto_uppercase_mode(mode: InputMode) -> bool {
	NO_AUTO_UPPERCASE_INPUT_MODES.contains(&mode)
}

pub(crate) fn is_all_caps_mode(mode: InputMode) -> bool {
	ALL_CAPS_INPUT_MODES.contains(&mode)
}
