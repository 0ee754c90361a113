//! Locale tags as reported by the text-entry host.
//!
//! Only the pieces the keyboard needs are modelled: the language and an
//! optional territory. Scripts, codesets and modifiers are accepted and dropped.

use std::fmt;
use std::str::FromStr;

use strum::EnumString;

/// Language of the active locale.
///
/// Parses ISO 639 codes case-insensitively. Unknown codes land in
/// [`Language::Other`] with the lower-cased code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Language {
	/// The neutral "C"/POSIX locale.
	#[default]
	#[strum(serialize = "c", serialize = "posix")]
	C,
	#[strum(serialize = "ar")]
	Arabic,
	#[strum(serialize = "zh")]
	Chinese,
	#[strum(serialize = "en")]
	English,
	#[strum(serialize = "fr")]
	French,
	#[strum(serialize = "de")]
	German,
	#[strum(serialize = "el")]
	Greek,
	#[strum(serialize = "he", serialize = "iw")]
	Hebrew,
	#[strum(serialize = "hi")]
	Hindi,
	#[strum(serialize = "ja")]
	Japanese,
	#[strum(serialize = "ko")]
	Korean,
	#[strum(serialize = "fa")]
	Persian,
	#[strum(serialize = "ru")]
	Russian,
	#[strum(serialize = "es")]
	Spanish,
	#[strum(serialize = "th")]
	Thai,
	/// Any language without a dedicated variant.
	#[strum(default)]
	Other(String),
}

impl Language {
	/// Returns the ISO 639 code, or `"C"` for the neutral locale.
	pub fn code(&self) -> &str {
		match self {
			Self::C => "C",
			Self::Arabic => "ar",
			Self::Chinese => "zh",
			Self::English => "en",
			Self::French => "fr",
			Self::German => "de",
			Self::Greek => "el",
			Self::Hebrew => "he",
			Self::Hindi => "hi",
			Self::Japanese => "ja",
			Self::Korean => "ko",
			Self::Persian => "fa",
			Self::Russian => "ru",
			Self::Spanish => "es",
			Self::Thai => "th",
			Self::Other(code) => code,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Locale tag parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
	#[error("empty locale tag")]
	Empty,
	#[error("invalid language subtag {0:?}")]
	InvalidLanguage(String),
	#[error("invalid territory subtag {0:?}")]
	InvalidTerritory(String),
}

/// A language plus optional territory, e.g. `ar_EG` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
	language: Language,
	territory: Option<String>,
}

impl Locale {
	/// Creates a locale without a territory.
	pub fn new(language: Language) -> Self {
		Self { language, territory: None }
	}

	/// Parses POSIX (`ll_CC.codeset@modifier`) and BCP 47 style (`ll-Scrp-CC`) tags.
	pub fn parse(tag: &str) -> Result<Self, LocaleError> {
		let tag = tag.trim();
		let tag = tag.split(['.', '@']).next().unwrap_or_default();
		if tag.is_empty() {
			return Err(LocaleError::Empty);
		}
		if tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
			return Ok(Self::default());
		}

		let mut subtags = tag.split(['_', '-']);
		let lang = subtags.next().unwrap_or_default();
		if !(2..=3).contains(&lang.len()) || !lang.bytes().all(|b| b.is_ascii_alphabetic()) {
			return Err(LocaleError::InvalidLanguage(lang.to_string()));
		}
		let lang = lang.to_ascii_lowercase();
		let language = Language::from_str(&lang).unwrap_or(Language::Other(lang));

		let mut territory = None;
		for subtag in subtags {
			// Script subtags (`Hant`, `Latn`) sit between language and territory.
			if subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic()) && territory.is_none() {
				continue;
			}
			let is_region = (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
				|| (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()));
			if !is_region {
				return Err(LocaleError::InvalidTerritory(subtag.to_string()));
			}
			territory = Some(subtag.to_ascii_uppercase());
			break;
		}

		Ok(Self { language, territory })
	}

	/// Returns the locale's language.
	pub fn language(&self) -> &Language {
		&self.language
	}

	/// Returns the territory code, if any.
	pub fn territory(&self) -> Option<&str> {
		self.territory.as_deref()
	}
}

impl FromStr for Locale {
	type Err = LocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.territory {
			Some(territory) => write!(f, "{}_{territory}", self.language),
			None => write!(f, "{}", self.language),
		}
	}
}
