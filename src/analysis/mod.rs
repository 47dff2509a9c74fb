//! Ciphertext-only cryptanalysis of the Vigenère cipher. Key-length
//! estimation and per-column key recovery are kept in separate submodules so
//! each statistic stays simple and independently testable.

pub mod attack;
pub mod chi;
pub mod ic;
