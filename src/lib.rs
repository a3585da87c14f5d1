//! Peptide mass fingerprint prediction from protein sequences.

pub mod digest;
pub mod errors;
pub mod export;
pub mod mass;
pub mod models;
pub mod protein;
