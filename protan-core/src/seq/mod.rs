pub mod normalize;
pub mod protein;
pub mod validate;

pub use normalize::{decompose, translate};
pub use protein::{Composition, Formula, ProteinSeq};
pub use validate::{validate, Abbreviation, RawSeq, Verdict};
