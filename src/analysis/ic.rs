//! Index-of-coincidence statistics and the key-length search built on them.
//! Ciphertext split at the true key length decomposes into effectively
//! monoalphabetic columns whose IC approaches the plaintext value; wrong
//! strides mix alphabets and stay near the uniform 1/26.

use crate::language::{LanguageModel, ALPHABET_LEN};

/// Probability that two letters drawn at random from `text` are equal.
/// Computed as `Σ f_i(f_i - 1) / (n(n - 1))` over the letter counts.
/// Returns 0.0 for texts shorter than two letters, where the statistic is
/// undefined. Input must already be normalized to uppercase A–Z.
pub fn index_of_coincidence(text: &[u8]) -> f64 {
    let n = text.len();
    if n < 2 {
        return 0.0;
    }
    let mut counts = [0usize; ALPHABET_LEN as usize];
    for &b in text {
        counts[usize::from(b - b'A')] += 1;
    }
    let pairs: usize = counts.iter().map(|&c| c * (c.saturating_sub(1))).sum();
    pairs as f64 / (n * (n - 1)) as f64
}

/// Splits `text` into `len` columns at stride `len`. Column `i` holds the
/// letters at positions congruent to `i` modulo `len`, so the columns
/// partition the input exactly.
pub fn columns(text: &[u8], len: usize) -> Vec<Vec<u8>> {
    let mut cols: Vec<Vec<u8>> = (0..len).map(|_| Vec::new()).collect();
    for (i, &b) in text.iter().enumerate() {
        cols[i % len].push(b);
    }
    cols
}

/// Estimates the key length of `ciphertext` by minimizing the distance
/// between the average column IC and the model's expected plaintext IC over
/// candidate lengths `1..=max_length`. Columns shorter than two letters are
/// excluded from the average; a candidate with no scorable column is
/// skipped. Ties keep the smallest length. Returns 1 when no candidate
/// qualifies at all, which is the degenerate short-ciphertext case.
pub fn estimate_key_length(ciphertext: &[u8], max_length: usize, model: &LanguageModel) -> usize {
    let mut best_length = 1usize;
    let mut best_distance = f64::INFINITY;

    for length in 1..=max_length {
        let mut ic_sum = 0.0;
        let mut scored = 0usize;
        for column in columns(ciphertext, length) {
            if column.len() >= 2 {
                ic_sum += index_of_coincidence(&column);
                scored += 1;
            }
        }
        if scored == 0 {
            continue;
        }
        let distance = (ic_sum / scored as f64 - model.expected_ic).abs();
        if distance < best_distance {
            best_distance = distance;
            best_length = length;
        }
    }

    best_length
}

#[cfg(test)]
mod tests {
    use super::{columns, estimate_key_length, index_of_coincidence};
    use crate::analysis::fixtures::ENGLISH_SAMPLE;
    use crate::cipher::encrypt;
    use crate::language::{normalize, ENGLISH};

    #[test]
    fn ic_is_zero_below_two_letters() {
        assert_eq!(index_of_coincidence(b""), 0.0);
        assert_eq!(index_of_coincidence(b"A"), 0.0);
    }

    #[test]
    fn ic_matches_hand_computed_values() {
        // AABB: 2*1 + 2*1 identical pairs out of 4*3 ordered pairs.
        assert!((index_of_coincidence(b"AABB") - 1.0 / 3.0).abs() < 1e-12);
        // A single repeated letter always collides.
        assert_eq!(index_of_coincidence(b"AAAA"), 1.0);
    }

    #[test]
    fn ic_stays_within_unit_interval() {
        let text = normalize(ENGLISH_SAMPLE);
        let ic = index_of_coincidence(text.as_bytes());
        assert!(ic > 0.0 && ic < 1.0);
    }

    #[test]
    fn columns_partition_by_residue() {
        let cols = columns(b"ABCDEFG", 3);
        assert_eq!(cols, vec![b"ADG".to_vec(), b"BE".to_vec(), b"CF".to_vec()]);
        let total: usize = cols.iter().map(Vec::len).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn recovers_key_length_from_natural_english() {
        let plaintext = normalize(ENGLISH_SAMPLE);
        let ciphertext = encrypt(&plaintext, "LEMON").expect("encryption should succeed");
        let estimated = estimate_key_length(ciphertext.as_bytes(), 10, &ENGLISH);
        assert_eq!(estimated, 5);
    }

    #[test]
    fn short_ciphertext_falls_back_to_length_one() {
        assert_eq!(estimate_key_length(b"A", 20, &ENGLISH), 1);
        assert_eq!(estimate_key_length(b"", 20, &ENGLISH), 1);
    }

    #[test]
    fn recovers_a_six_letter_key_length() {
        let plaintext = normalize(ENGLISH_SAMPLE);
        let ciphertext = encrypt(&plaintext, "SECRET").expect("encryption should succeed");
        let estimated = estimate_key_length(ciphertext.as_bytes(), 10, &ENGLISH);
        assert_eq!(estimated, 6);
    }
}
