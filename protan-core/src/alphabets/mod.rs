pub mod protein;

use bit_set::BitSet;
use std::borrow::Borrow;

#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    /// Alphabet of the distinct symbols used by `text`, upper-cased.
    pub fn of_upper<C, T>(text: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        Alphabet::new(text.into_iter().map(|c| c.borrow().to_ascii_uppercase()))
    }

    pub fn is_subset(&self, other: &Alphabet) -> bool {
        self.symbols.is_subset(&other.symbols)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_eq() {
        assert_eq!(Alphabet::new(b"ARND"), Alphabet::new(b"ARND"));
        assert_eq!(Alphabet::new(b"ARND"), Alphabet::new(b"DNRA"));
        assert_ne!(Alphabet::new(b"ARND"), Alphabet::new(b"ARN"));
    }

    #[test]
    fn test_of_upper_folds_case() {
        let used = Alphabet::of_upper(b"aAcC");
        assert_eq!(used, Alphabet::new(b"AC"));
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_subset() {
        let big = Alphabet::new(b"ACDE");
        let small = Alphabet::new(b"AC");
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(Alphabet::default().is_subset(&small));
        assert!(Alphabet::default().is_empty());
    }
}
