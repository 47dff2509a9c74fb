//! Chi-squared goodness-of-fit scoring and the per-column Caesar shift
//! search. Under the correct key length each ciphertext column is a single
//! Caesar substitution, so the shift whose de-shifted counts best match the
//! language's letter distribution is the column's key letter.

use crate::language::{LanguageModel, ALPHABET_LEN};

/// Chi-squared distance between the letter counts observed in `text` and
/// the counts `model` expects for a text of the same length. Lower is
/// better. Empty input scores infinite, as does any text containing a
/// letter the model assigns zero frequency.
pub fn chi_squared(text: &[u8], model: &LanguageModel) -> f64 {
    let n = text.len();
    if n == 0 {
        return f64::INFINITY;
    }
    let mut counts = [0usize; ALPHABET_LEN as usize];
    for &b in text {
        counts[usize::from(b - b'A')] += 1;
    }

    let mut score = 0.0;
    for letter in 0..ALPHABET_LEN {
        let observed = counts[usize::from(letter)] as f64;
        let expected = model.frequency(letter) * n as f64;
        if expected == 0.0 {
            if observed > 0.0 {
                return f64::INFINITY;
            }
        } else {
            score += (observed - expected).powi(2) / expected;
        }
    }
    score
}

/// De-shifts `column` by `shift`, undoing one Caesar substitution.
pub(crate) fn caesar_decode(column: &[u8], shift: u8) -> Vec<u8> {
    column
        .iter()
        .map(|&b| (b - b'A' + ALPHABET_LEN - shift) % ALPHABET_LEN + b'A')
        .collect()
}

/// Scores all 26 candidate shifts for `column` and returns the winner with
/// its chi-squared score. Ties keep the smallest shift. `None` for an empty
/// column, which carries no usable statistics.
pub(crate) fn best_shift(column: &[u8], model: &LanguageModel) -> Option<(u8, f64)> {
    if column.is_empty() {
        return None;
    }
    let mut best = (0u8, f64::INFINITY);
    for shift in 0..ALPHABET_LEN {
        let score = chi_squared(&caesar_decode(column, shift), model);
        if score < best.1 {
            best = (shift, score);
        }
    }
    Some(best)
}

/// Recovers the Caesar shift of one ciphertext column, which doubles as the
/// alphabet index of the column's key letter. Deterministic for a given
/// column and model.
pub fn recover_column_shift(column: &[u8], model: &LanguageModel) -> Option<u8> {
    best_shift(column, model).map(|(shift, _)| shift)
}

#[cfg(test)]
mod tests {
    use super::{caesar_decode, chi_squared, recover_column_shift};
    use crate::analysis::fixtures::ENGLISH_SAMPLE;
    use crate::language::{normalize, ENGLISH, PORTUGUESE};

    #[test]
    fn empty_text_scores_infinite() {
        assert!(chi_squared(b"", &ENGLISH).is_infinite());
    }

    #[test]
    fn natural_text_beats_shifted_text() {
        let plain = normalize(ENGLISH_SAMPLE);
        let shifted = caesar_decode(plain.as_bytes(), 3);
        assert!(chi_squared(plain.as_bytes(), &ENGLISH) < chi_squared(&shifted, &ENGLISH));
    }

    #[test]
    fn recovers_a_known_caesar_shift() {
        let plain = normalize(ENGLISH_SAMPLE);
        let column: Vec<u8> = plain.as_bytes()[..200]
            .iter()
            .map(|&b| (b - b'A' + 7) % 26 + b'A')
            .collect();
        assert_eq!(recover_column_shift(&column, &ENGLISH), Some(7));
    }

    #[test]
    fn shift_zero_wins_on_unshifted_text() {
        let plain = normalize(ENGLISH_SAMPLE);
        assert_eq!(recover_column_shift(plain.as_bytes(), &ENGLISH), Some(0));
    }

    #[test]
    fn recovery_is_deterministic() {
        let column = normalize(ENGLISH_SAMPLE);
        let first = recover_column_shift(column.as_bytes(), &PORTUGUESE);
        let second = recover_column_shift(column.as_bytes(), &PORTUGUESE);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_column_has_no_shift() {
        assert_eq!(recover_column_shift(b"", &ENGLISH), None);
    }
}
