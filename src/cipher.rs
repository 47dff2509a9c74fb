//! Case-aware Vigenère codec over the 26-letter Latin alphabet.
//! Non-alphabetic characters pass through unchanged and never consume a key
//! position, so punctuation and spacing survive an encrypt/decrypt round trip.

use thiserror::Error;

use crate::language::ALPHABET_LEN;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("key is empty")]
    EmptyKey,
    #[error("key contains no alphabet letters")]
    KeyNotAlphabetic,
}

/// Reduces a key to its shift sequence, one entry per letter. Case and
/// non-letter characters in the key are ignored.
fn key_shifts(key: &str) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let shifts: Vec<u8> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();
    if shifts.is_empty() {
        return Err(CipherError::KeyNotAlphabetic);
    }
    Ok(shifts)
}

fn shift_letter(letter: char, shift: u8, forward: bool) -> char {
    let base = if letter.is_ascii_uppercase() { b'A' } else { b'a' };
    let index = letter as u8 - base;
    let moved = if forward {
        (index + shift) % ALPHABET_LEN
    } else {
        (index + ALPHABET_LEN - shift) % ALPHABET_LEN
    };
    (base + moved) as char
}

fn transform(text: &str, key: &str, forward: bool) -> Result<String, CipherError> {
    let shifts = key_shifts(key)?;
    let mut out = String::with_capacity(text.len());
    let mut position = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push(shift_letter(c, shifts[position % shifts.len()], forward));
            position += 1;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Encrypts `plaintext` with a repeating-key Vigenère cipher. The key letter
/// used at letter position `i` is `key[i mod key_len]`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    transform(plaintext, key, true)
}

/// Decrypts `ciphertext` with the additive inverse of [`encrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    transform(ciphertext, key, false)
}
