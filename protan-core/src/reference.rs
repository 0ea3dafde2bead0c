//! Reference per-residue tables, indexed in the order of
//! [`AA20`](crate::alphabets::protein::AA20).

use crate::alphabets::protein;

/// Relative abundance (%) of each residue across UniProtKB.
pub const UNIPROT_ABUNDANCE: [f64; 20] = [
    9.03, // A
    5.84, // R
    3.79, // N
    5.47, // D
    1.29, // C
    6.24, // E
    3.80, // Q
    7.27, // G
    2.22, // H
    5.53, // I
    9.85, // L
    4.93, // K
    2.33, // M
    3.88, // F
    4.99, // P
    6.82, // S
    5.55, // T
    1.30, // W
    2.88, // Y
    6.86, // V
];

/// Side-chain charge at physiological pH.
pub const CHARGE: [i8; 20] = [
    0,  // A
    1,  // R
    0,  // N
    -1, // D
    0,  // C
    -1, // E
    0,  // Q
    0,  // G
    1,  // H
    0,  // I
    0,  // L
    1,  // K
    0,  // M
    0,  // F
    0,  // P
    0,  // S
    0,  // T
    0,  // W
    0,  // Y
    0,  // V
];

/// Average residue masses (Da), i.e. free amino acid minus one water.
pub const RESIDUE_MASS_AVG: [f64; 20] = [
    71.0788,  // A
    156.1875, // R
    114.1038, // N
    115.0886, // D
    103.1388, // C
    129.1155, // E
    128.1307, // Q
    57.0519,  // G
    137.1411, // H
    113.1594, // I
    113.1594, // L
    128.1741, // K
    131.1926, // M
    147.1766, // F
    97.1167,  // P
    87.0782,  // S
    101.1051, // T
    186.2132, // W
    163.1760, // Y
    99.1326,  // V
];

pub const WATER_MASS: f64 = 18.01528;

/// Residue elemental composition as `[C, H, N, O, S]`.
pub const RESIDUE_ELEMENTS: [[u32; 5]; 20] = [
    [3, 5, 1, 1, 0],   // A
    [6, 12, 4, 1, 0],  // R
    [4, 6, 2, 2, 0],   // N
    [4, 5, 1, 3, 0],   // D
    [3, 5, 1, 1, 1],   // C
    [5, 7, 1, 3, 0],   // E
    [5, 8, 2, 2, 0],   // Q
    [2, 3, 1, 1, 0],   // G
    [6, 7, 3, 1, 0],   // H
    [6, 11, 1, 1, 0],  // I
    [6, 11, 1, 1, 0],  // L
    [6, 12, 2, 1, 0],  // K
    [5, 9, 1, 1, 1],   // M
    [9, 9, 1, 1, 0],   // F
    [5, 7, 1, 1, 0],   // P
    [3, 5, 1, 2, 0],   // S
    [4, 7, 1, 2, 0],   // T
    [11, 10, 2, 1, 0], // W
    [9, 9, 1, 2, 0],   // Y
    [5, 9, 1, 1, 0],   // V
];

pub const WATER_ELEMENTS: [u32; 5] = [0, 2, 0, 1, 0];

pub fn abundance(code: u8) -> Option<f64> {
    protein::index(code).map(|idx| UNIPROT_ABUNDANCE[idx])
}

pub fn charge(code: u8) -> Option<i8> {
    protein::index(code).map(|idx| CHARGE[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abundance_sums_to_about_one_hundred() {
        let total: f64 = UNIPROT_ABUNDANCE.iter().sum();
        assert!((total - 100.0).abs() < 1.0, "total = {total}");
        assert!(UNIPROT_ABUNDANCE.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(abundance(b'L'), Some(9.85));
        assert_eq!(abundance(b'w'), Some(1.30));
        assert_eq!(charge(b'd'), Some(-1));
        assert_eq!(charge(b'K'), Some(1));
        assert_eq!(charge(b'X'), None);
        assert_eq!(abundance(b'B'), None);
    }

    #[test]
    fn charges_are_unit_or_zero() {
        assert!(CHARGE.iter().all(|c| (-1..=1).contains(c)));
        assert_eq!(CHARGE.iter().filter(|&&c| c != 0).count(), 5);
    }

    #[test]
    fn residue_masses_match_elements() {
        // Glycine residue C2H3NO: 2*12.011 + 3*1.008 + 14.007 + 15.999
        let [c, h, n, o, s] = RESIDUE_ELEMENTS[7];
        let mass = c as f64 * 12.011 + h as f64 * 1.008 + n as f64 * 14.007 + o as f64 * 15.999
            + s as f64 * 32.06;
        assert!((mass - RESIDUE_MASS_AVG[7]).abs() < 0.01);
    }
}
