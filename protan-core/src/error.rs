use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("unknown three-letter code '{token}' at position {pos}")]
    UnknownCode { token: String, pos: usize },

    #[error("Unknown operation `{name}`. Please, select from: {}", quoted(.known))]
    UnknownOperation {
        name: String,
        known: Vec<&'static str>,
    },

    #[error("invalid abbreviation: {value} (must be 1 or 3)")]
    InvalidAbbreviation { value: i64 },

    #[error("sample {which} is empty")]
    EmptySample { which: usize },

    #[error("sample {which} has a non-finite value at position {pos}")]
    NonFiniteSample { which: usize, pos: usize },
}

fn quoted(names: &[&'static str]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type BioResult<T> = Result<T, BioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_lists_choices() {
        let err = BioError::UnknownOperation {
            name: "frobnicate".into(),
            known: vec!["seq_length", "charge"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown operation `frobnicate`. Please, select from: \"seq_length\", \"charge\""
        );
    }

    #[test]
    fn unknown_code_names_token() {
        let err = BioError::UnknownCode {
            token: "Xaa".into(),
            pos: 2,
        };
        assert_eq!(err.to_string(), "unknown three-letter code 'Xaa' at position 2");
    }
}
