use crate::alphabets::{protein, Alphabet};
use crate::error::{BioError, BioResult};
use crate::reference::UNIPROT_ABUNDANCE;
use crate::seq::normalize::{decompose, translate};
use crate::seq::protein::ProteinSeq;
use crate::stats;
use std::fmt;

/// How residues are written in an input sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Abbreviation {
    #[default]
    OneLetter,
    ThreeLetter,
}

impl TryFrom<i64> for Abbreviation {
    type Error = BioError;

    fn try_from(value: i64) -> BioResult<Self> {
        match value {
            1 => Ok(Abbreviation::OneLetter),
            3 => Ok(Abbreviation::ThreeLetter),
            _ => Err(BioError::InvalidAbbreviation { value }),
        }
    }
}

/// A sequence that failed validation, in the form it was checked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawSeq {
    /// One-letter input, exactly as given.
    Letters(String),
    /// Three-letter input after decomposition.
    Tokens(Vec<String>),
}

impl fmt::Display for RawSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSeq::Letters(s) => f.write_str(s),
            RawSeq::Tokens(tokens) => tokens.iter().try_for_each(|t| f.write_str(t)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Valid(ProteinSeq),
    Corrupted(RawSeq),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }
}

/// Decides whether `seq` is a plausible protein.
///
/// One-letter sequences must use only canonical residues. When all 20
/// residues occur, their percentage composition must also be
/// indistinguishable from the UniProt reference under [`stats::compare`].
/// Three-letter sequences must decompose into known codes and are
/// translated to one-letter form.
pub fn validate(seq: &str, mode: Abbreviation) -> BioResult<Verdict> {
    match mode {
        Abbreviation::ThreeLetter => {
            let tokens = decompose(seq);
            if !tokens.iter().all(|t| protein::is_three_letter_code(t)) {
                return Ok(Verdict::Corrupted(RawSeq::Tokens(tokens)));
            }
            let letters = translate(&tokens)?;
            Ok(Verdict::Valid(ProteinSeq::from_bytes_unchecked(
                letters.into_bytes(),
            )))
        }
        Abbreviation::OneLetter => {
            let used = Alphabet::of_upper(seq.as_bytes());
            let canonical = protein::alphabet();
            if !used.is_subset(&canonical) {
                return Ok(Verdict::Corrupted(RawSeq::Letters(seq.to_string())));
            }

            let protein = ProteinSeq::from_bytes_unchecked(seq.as_bytes().to_vec());
            if used.len() == canonical.len() {
                let composition = protein.composition();
                if !stats::compare(composition.as_array(), &UNIPROT_ABUNDANCE)? {
                    return Ok(Verdict::Corrupted(RawSeq::Letters(seq.to_string())));
                }
            }
            Ok(Verdict::Valid(protein))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(seq: &str, mode: Abbreviation) -> bool {
        validate(seq, mode).unwrap().is_valid()
    }

    #[test]
    fn abbreviation_from_int() {
        assert_eq!(Abbreviation::try_from(1), Ok(Abbreviation::OneLetter));
        assert_eq!(Abbreviation::try_from(3), Ok(Abbreviation::ThreeLetter));
        assert_eq!(
            Abbreviation::try_from(2),
            Err(BioError::InvalidAbbreviation { value: 2 })
        );
        assert_eq!(Abbreviation::default(), Abbreviation::OneLetter);
    }

    #[test]
    fn one_letter_membership() {
        assert!(valid("AAAA", Abbreviation::OneLetter));
        assert!(valid("mkvL", Abbreviation::OneLetter));
        assert!(valid("", Abbreviation::OneLetter));
        assert_eq!(
            validate("AAXA", Abbreviation::OneLetter).unwrap(),
            Verdict::Corrupted(RawSeq::Letters("AAXA".into()))
        );
        assert!(!valid("AA A", Abbreviation::OneLetter));
    }

    #[test]
    fn one_letter_keeps_original_case() {
        match validate("acDE", Abbreviation::OneLetter).unwrap() {
            Verdict::Valid(seq) => assert_eq!(seq.as_bytes(), b"acDE"),
            other => panic!("unexpected verdict {other:?}"),
        }
    }

    #[test]
    fn full_alphabet_near_reference_is_valid() {
        assert!(valid("ARNDCEQGHILKMFPSTWYV", Abbreviation::OneLetter));
        assert!(valid("arndceqghilkmfpstwyv", Abbreviation::OneLetter));
    }

    #[test]
    fn full_alphabet_far_from_reference_is_corrupted() {
        // One of each of 19 residues plus 81 alanines: 1% vs 81%.
        let seq = format!("{}{}", "A".repeat(81), "RNDCEQGHILKMFPSTWYV");
        assert_eq!(
            validate(&seq, Abbreviation::OneLetter).unwrap(),
            Verdict::Corrupted(RawSeq::Letters(seq.clone()))
        );
    }

    #[test]
    fn skewed_but_incomplete_alphabet_is_valid() {
        let seq = format!("{}{}", "A".repeat(81), "RNDCEQGHILKMFPSTWY");
        assert!(valid(&seq, Abbreviation::OneLetter));
    }

    #[test]
    fn three_letter_translates() {
        match validate("AlaGlyLeu", Abbreviation::ThreeLetter).unwrap() {
            Verdict::Valid(seq) => assert_eq!(seq.as_bytes(), b"AGL"),
            other => panic!("unexpected verdict {other:?}"),
        }
        assert!(valid("metLYSval", Abbreviation::ThreeLetter));
    }

    #[test]
    fn three_letter_rejects_unknown_and_partial_tokens() {
        assert_eq!(
            validate("AlaXaa", Abbreviation::ThreeLetter).unwrap(),
            Verdict::Corrupted(RawSeq::Tokens(vec!["Ala".into(), "Xaa".into()]))
        );
        let verdict = validate("alaGl", Abbreviation::ThreeLetter).unwrap();
        assert_eq!(
            verdict,
            Verdict::Corrupted(RawSeq::Tokens(vec!["Ala".into(), "Gl".into()]))
        );
        if let Verdict::Corrupted(raw) = verdict {
            assert_eq!(raw.to_string(), "AlaGl");
        }
    }
}
