//! One-shot ciphertext-only attack: estimate the key length, recover one
//! key letter per column, then decrypt. The estimate is statistical and may
//! land on a harmonic of the true key length; short or atypical ciphertext
//! yields an empty (inconclusive) report rather than an error.

use serde::{Deserialize, Serialize};

use crate::analysis::chi::best_shift;
use crate::analysis::ic::{columns, estimate_key_length};
use crate::cipher;
use crate::language::{normalize, LanguageModel};

/// Best Caesar shift found for one ciphertext column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFit {
    pub index: usize,
    pub shift: u8,
    pub key_letter: char,
    pub chi_squared: f64,
}

/// Structured outcome of a ciphertext-only attack. An empty `key` marks an
/// inconclusive attack; presentation of the intermediate values is left
/// entirely to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackReport {
    pub key: String,
    pub plaintext: String,
    pub key_length: usize,
    pub columns: Vec<ColumnFit>,
}

impl AttackReport {
    /// True when the attack could not recover any key letter. Inconclusive
    /// results are expected for short or degenerate ciphertext, not bugs.
    pub fn is_inconclusive(&self) -> bool {
        self.key.is_empty()
    }
}

/// Runs the full ciphertext-only attack against `raw` ciphertext, searching
/// key lengths `1..=max_key_length` under `model`. One-shot: no step is
/// retried, and a failed precondition short-circuits to an empty report.
pub fn attack(raw: &str, max_key_length: usize, model: &LanguageModel) -> AttackReport {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return AttackReport::default();
    }
    let text = normalized.as_bytes();

    let key_length = estimate_key_length(text, max_key_length, model);
    if key_length == 0 {
        return AttackReport::default();
    }

    let mut key = String::with_capacity(key_length);
    let mut fits = Vec::with_capacity(key_length);
    for (index, column) in columns(text, key_length).into_iter().enumerate() {
        let Some((shift, score)) = best_shift(&column, model) else {
            continue;
        };
        let key_letter = (b'A' + shift) as char;
        key.push(key_letter);
        fits.push(ColumnFit {
            index,
            shift,
            key_letter,
            chi_squared: score,
        });
    }
    if key.is_empty() {
        return AttackReport::default();
    }

    // The key is non-empty and alphabetic by construction, so decryption
    // cannot fail here.
    let plaintext = cipher::decrypt(&normalized, &key).unwrap_or_default();

    AttackReport {
        key,
        plaintext,
        key_length,
        columns: fits,
    }
}
