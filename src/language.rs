//! Built-in language statistics for the frequency attack, plus the text
//! normalizer that reduces raw input to the bare A–Z stream every statistic
//! operates on. Models are immutable values injected by callers, never
//! module-level mutable state.

pub const ALPHABET_LEN: u8 = 26;

/// Letter statistics for one natural language. The frequency table sums to
/// roughly 1.0; small rounding drift is tolerated since chi-squared scoring
/// only compares relative magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageModel {
    pub name: &'static str,
    /// Expected relative frequency per letter, indexed A=0 through Z=25.
    pub frequencies: [f64; 26],
    /// Index of coincidence of typical plaintext in this language.
    pub expected_ic: f64,
}

impl LanguageModel {
    /// Expected relative frequency of the letter with alphabet index
    /// `letter` (A=0 .. Z=25).
    pub fn frequency(&self, letter: u8) -> f64 {
        self.frequencies[usize::from(letter)]
    }
}

pub const ENGLISH: LanguageModel = LanguageModel {
    name: "english",
    frequencies: [
        0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
        0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
        0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
        0.01974, 0.00074,
    ],
    expected_ic: 0.067,
};

pub const PORTUGUESE: LanguageModel = LanguageModel {
    name: "portuguese",
    frequencies: [
        0.1463, 0.0104, 0.0388, 0.0499, 0.1257, 0.0102, 0.0130, 0.0128,
        0.0618, 0.0040, 0.0002, 0.0278, 0.0474, 0.0505, 0.1073, 0.0252,
        0.0120, 0.0653, 0.0781, 0.0434, 0.0463, 0.0167, 0.0001, 0.0021,
        0.0001, 0.0047,
    ],
    expected_ic: 0.07813849,
};

/// Folds an accented Latin letter to its base letter, preserving case.
/// Covers the acute, grave, circumflex, and tilde vowels plus cedilla-C;
/// anything else is returned unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' => 'A',
        'É' | 'È' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' => 'O',
        'Ú' | 'Ù' | 'Û' => 'U',
        'Ç' => 'C',
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'è' | 'ê' => 'e',
        'í' | 'ì' | 'î' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'û' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// Reduces raw text to uppercase A–Z only: accents are folded to their base
/// letter, the result is uppercased, and everything else is dropped.
/// Deterministic and total; empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(fold_accent)
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}
