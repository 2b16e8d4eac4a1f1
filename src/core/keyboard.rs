//! Virtual Assamese keyboard: key tables and tab grouping.
//!
//! The tables follow the standard Assamese alphabet ordering; `ক্ষ` and the
//! diacritic keys are multi-byte conjuncts, so keys are strings rather than
//! chars.

/// Independent vowels.
pub const VOWELS: &[&str] = &[
    "অ", "আ", "ই", "ঈ", "উ", "ঊ", "ঋ", "এ", "ঐ", "ও", "ঔ",
];

/// Consonants, including the Assamese ৰ and ৱ.
pub const CONSONANTS: &[&str] = &[
    "ক", "খ", "গ", "ঘ", "ঙ", "চ", "ছ", "জ", "ঝ", "ঞ", "ট", "ঠ", "ড", "ঢ", "ণ", "ত", "থ", "দ",
    "ধ", "ন", "প", "ফ", "ব", "ভ", "ম", "য", "ৰ", "ল", "ৱ", "শ", "ষ", "স", "হ", "ক্ষ", "ড়", "ঢ়",
    "য়", "ৎ",
];

/// Vowel signs, virama, and other combining marks.
pub const DIACRITICS: &[&str] = &[
    "া", "ি", "ী", "ু", "ূ", "ৃ", "ে", "ৈ", "ো", "ৌ", "্", "ং", "ঃ", "ঁ",
];

/// Assamese digits.
pub const NUMERALS: &[&str] = &["১", "২", "৩", "৪", "৫", "৬", "৭", "৮", "৯", "০"];

/// Punctuation, Assamese daṇḍa first.
pub const PUNCTUATION: &[&str] = &[
    "।", "৷", ",", ".", "?", "!", "\"", "'", ":", ";", "(", ")", "-", "+", "=", "/", "\\",
];

/// Key group shown as a tab in the keyboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardTab {
    Vowels,
    Consonants,
    Diacritics,
    Numerals,
    Punctuation,
}

impl KeyboardTab {
    /// Tabs in display order.
    pub const ALL: [KeyboardTab; 5] = [
        KeyboardTab::Vowels,
        KeyboardTab::Consonants,
        KeyboardTab::Diacritics,
        KeyboardTab::Numerals,
        KeyboardTab::Punctuation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            KeyboardTab::Vowels => "Vowels",
            KeyboardTab::Consonants => "Consonants",
            KeyboardTab::Diacritics => "Diacritics",
            KeyboardTab::Numerals => "Numbers",
            KeyboardTab::Punctuation => "Punctuation",
        }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            KeyboardTab::Vowels => VOWELS,
            KeyboardTab::Consonants => CONSONANTS,
            KeyboardTab::Diacritics => DIACRITICS,
            KeyboardTab::Numerals => NUMERALS,
            KeyboardTab::Punctuation => PUNCTUATION,
        }
    }

    /// The tab after this one, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
