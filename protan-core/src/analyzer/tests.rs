use super::*;
use crate::error::BioError;
use crate::seq::protein::ProteinSeq;

// ─── variadic entry point ───────────────────────────────────

#[test]
fn length_batch_with_one_corrupted() {
    let (results, corrupted) =
        run_protein_analyzer_tool(&["AAAA", "AAXA"], "seq_length", Abbreviation::OneLetter)
            .unwrap();
    assert_eq!(results, OneOrMany::One(Output::Length(4)));
    assert_eq!(corrupted, OneOrMany::One((1, RawSeq::Letters("AAXA".into()))));
}

#[test]
fn unknown_operation_is_fatal() {
    let err = run_protein_analyzer_tool(&["AAAA"], "frobnicate", Abbreviation::OneLetter)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown operation `frobnicate`. Please, select from: \"content_check\", \
         \"seq_length\", \"protein_formula\", \"protein_mass\", \"charge\""
    );
}

#[test]
fn several_corrupted_stay_a_list() {
    let (results, corrupted) =
        run_protein_analyzer_tool(&["ZZ", "MKV", "B"], "charge", Abbreviation::OneLetter)
            .unwrap();
    assert_eq!(results, OneOrMany::One(Output::Charge(1)));
    assert_eq!(
        corrupted,
        OneOrMany::Many(vec![
            (0, RawSeq::Letters("ZZ".into())),
            (2, RawSeq::Letters("B".into())),
        ])
    );
}

// ─── operations through the batch ───────────────────────────

#[test]
fn content_of_full_alphabet() {
    let (results, _) = run_protein_analyzer_tool(
        &["ARNDCEQGHILKMFPSTWYV"],
        "content_check",
        Abbreviation::OneLetter,
    )
    .unwrap();
    match results {
        OneOrMany::One(Output::Composition(comp)) => {
            assert!(comp.iter().all(|(_, pct)| (pct - 5.0).abs() < 1e-9));
        }
        other => panic!("unexpected results {other:?}"),
    }
}

#[test]
fn statistically_rejected_sequence_is_corrupted() {
    let skewed = format!("{}{}", "L".repeat(81), "ARNDCEQGHIKMFPSTWYV");
    let (results, corrupted) = run_protein_analyzer_tool(
        &[skewed.as_str(), "GG"],
        "protein_mass",
        Abbreviation::OneLetter,
    )
    .unwrap();
    let gg = ProteinSeq::new(b"GG".to_vec()).unwrap().molecular_weight();
    assert_eq!(results, OneOrMany::One(Output::Mass(gg)));
    assert_eq!(corrupted, OneOrMany::One((0, RawSeq::Letters(skewed))));
}

#[test]
fn three_letter_mass_matches_one_letter() {
    let (three, _) =
        run_protein_analyzer_tool(&["MetLysVal"], "protein_mass", Abbreviation::ThreeLetter)
            .unwrap();
    let (one, _) =
        run_protein_analyzer_tool(&["MKV"], "protein_mass", Abbreviation::OneLetter).unwrap();
    assert_eq!(three, one);
}

#[test]
fn corrupted_three_letter_keeps_tokens() {
    let (results, corrupted) = run_protein_analyzer_tool(
        &["GlyGly", "GlyGl"],
        "protein_formula",
        Abbreviation::ThreeLetter,
    )
    .unwrap();
    match results {
        OneOrMany::One(Output::Formula(formula)) => assert_eq!(formula.to_string(), "C4H8N2O3"),
        other => panic!("unexpected results {other:?}"),
    }
    assert_eq!(
        corrupted,
        OneOrMany::One((1, RawSeq::Tokens(vec!["Gly".into(), "Gl".into()])))
    );
}

#[test]
fn invalid_abbreviation() {
    assert_eq!(
        Abbreviation::try_from(2),
        Err(BioError::InvalidAbbreviation { value: 2 })
    );
}
