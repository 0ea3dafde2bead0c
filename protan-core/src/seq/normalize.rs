use crate::alphabets::protein;
use crate::error::{BioError, BioResult};

/// Splits `seq` into consecutive three-character tokens, each re-cased to
/// `Xxx` form. A trailing partial chunk is kept as its own token.
pub fn decompose(seq: &str) -> Vec<String> {
    let chars: Vec<char> = seq.chars().collect();
    chars.chunks(3).map(capitalize).collect()
}

fn capitalize(chunk: &[char]) -> String {
    let mut out = String::with_capacity(chunk.len());
    for (i, c) in chunk.iter().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Translates three-letter tokens to one-letter codes.
///
/// Fails on the first token that is not a three-letter code.
pub fn translate<S: AsRef<str>>(tokens: &[S]) -> BioResult<String> {
    let mut out = String::with_capacity(tokens.len());
    for (pos, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let one = protein::three_to_one(token).ok_or_else(|| BioError::UnknownCode {
            token: token.to_string(),
            pos,
        })?;
        out.push(one as char);
    }
    Ok(out)
}
