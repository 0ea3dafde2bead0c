#[macro_use]
mod par;

pub mod alphabets;
pub mod analyzer;
pub mod error;
pub mod reference;
pub mod seq;
pub mod stats;
