//! Rust rewrite of a classical Vigenère toolkit. The crate is deliberately
//! small and transparent: the codec is plain mod-26 arithmetic, and the
//! ciphertext-only attack recovers an unknown key from letter statistics
//! alone, so every step of the analysis stays readable in-repo.

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod language;
