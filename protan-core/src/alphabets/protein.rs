use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// Canonical one-letter codes, in table order.
pub const AA20: [u8; 20] = *b"ARNDCEQGHILKMFPSTWYV";

/// Three-letter codes paired with their one-letter equivalents.
pub const THREE_LETTER: [(&str, u8); 20] = [
    ("Ala", b'A'),
    ("Arg", b'R'),
    ("Asn", b'N'),
    ("Asp", b'D'),
    ("Cys", b'C'),
    ("Glu", b'E'),
    ("Gln", b'Q'),
    ("Gly", b'G'),
    ("His", b'H'),
    ("Ile", b'I'),
    ("Leu", b'L'),
    ("Lys", b'K'),
    ("Met", b'M'),
    ("Phe", b'F'),
    ("Pro", b'P'),
    ("Ser", b'S'),
    ("Thr", b'T'),
    ("Trp", b'W'),
    ("Tyr", b'Y'),
    ("Val", b'V'),
];

static AA20_INDEX: LazyLock<[i8; 256]> = LazyLock::new(|| {
    let mut map = [-1i8; 256];
    for (idx, &b) in AA20.iter().enumerate() {
        map[b as usize] = idx as i8;
        let lower = b.to_ascii_lowercase();
        map[lower as usize] = idx as i8;
    }
    map
});

/// Upper-case canonical alphabet. Callers fold case before checking membership.
pub fn alphabet() -> Alphabet {
    Alphabet::new(&AA20[..])
}

/// Table position of a canonical code, ignoring case.
#[inline]
pub fn index(b: u8) -> Option<usize> {
    let idx = AA20_INDEX[b as usize];
    (idx >= 0).then_some(idx as usize)
}

/// One-letter code for a capitalized three-letter token such as `"Gly"`.
pub fn three_to_one(token: &str) -> Option<u8> {
    THREE_LETTER
        .iter()
        .find(|(code, _)| *code == token)
        .map(|&(_, one)| one)
}

pub fn is_three_letter_code(token: &str) -> bool {
    three_to_one(token).is_some()
}
