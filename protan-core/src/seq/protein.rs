use crate::alphabets::protein;
use crate::error::{BioError, BioResult};
use crate::reference::{
    CHARGE, RESIDUE_ELEMENTS, RESIDUE_MASS_AVG, WATER_ELEMENTS, WATER_MASS,
};
use std::fmt;

/// A protein sequence over the 20 canonical one-letter codes, either case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        for (pos, &b) in bytes.iter().enumerate() {
            if protein::index(b).is_none() {
                return Err(BioError::InvalidChar { ch: b as char, pos });
            }
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        // Canonical codes are ASCII.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn aa_counts_20(&self) -> [u32; 20] {
        let mut counts = [0u32; 20];
        for &b in self.as_bytes() {
            if let Some(idx) = protein::index(b) {
                counts[idx] += 1;
            }
        }
        counts
    }

    pub fn composition(&self) -> Composition {
        let mut percent = [0.0f64; 20];
        let len = self.len();
        if len == 0 {
            return Composition { percent };
        }
        let counts = self.aa_counts_20();
        let denom = len as f64;
        for (i, &c) in counts.iter().enumerate() {
            if c > 0 {
                percent[i] = c as f64 * 100.0 / denom;
            }
        }
        Composition { percent }
    }

    pub fn formula(&self) -> Formula {
        let mut atoms = WATER_ELEMENTS;
        for (idx, &count) in self.aa_counts_20().iter().enumerate() {
            for (total, &per_residue) in atoms.iter_mut().zip(RESIDUE_ELEMENTS[idx].iter()) {
                *total += per_residue * count;
            }
        }
        Formula { atoms }
    }

    /// Average molecular mass in daltons.
    pub fn molecular_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .aa_counts_20()
            .iter()
            .zip(RESIDUE_MASS_AVG.iter())
            .map(|(&count, &mass)| count as f64 * mass)
            .sum();
        total + WATER_MASS
    }

    /// Sum of side-chain charges at physiological pH.
    pub fn charge(&self) -> i64 {
        self.aa_counts_20()
            .iter()
            .zip(CHARGE.iter())
            .map(|(&count, &charge)| count as i64 * charge as i64)
            .sum()
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of each canonical residue, in table order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    percent: [f64; 20],
}

impl Composition {
    pub fn get(&self, code: u8) -> Option<f64> {
        protein::index(code).map(|idx| self.percent[idx])
    }

    pub fn as_array(&self) -> &[f64; 20] {
        &self.percent
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        protein::AA20
            .iter()
            .zip(self.percent.iter())
            .map(|(&code, &pct)| (code as char, pct))
    }
}

const ELEMENT_SYMBOLS: [&str; 5] = ["C", "H", "N", "O", "S"];

/// Elemental formula of a whole chain, written in `C H N O S` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Formula {
    atoms: [u32; 5],
}

impl Formula {
    pub fn carbon(&self) -> u32 {
        self.atoms[0]
    }

    pub fn hydrogen(&self) -> u32 {
        self.atoms[1]
    }

    pub fn nitrogen(&self) -> u32 {
        self.atoms[2]
    }

    pub fn oxygen(&self) -> u32 {
        self.atoms[3]
    }

    pub fn sulfur(&self) -> u32 {
        self.atoms[4]
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, &count) in ELEMENT_SYMBOLS.iter().zip(self.atoms.iter()) {
            match count {
                0 => {}
                1 => f.write_str(symbol)?,
                n => write!(f, "{symbol}{n}")?,
            }
        }
        Ok(())
    }
}
