use schema::{AttackVector, ExploitLabel, Impact, Scope};

use super::*;

// =============================================================
// parse_record_spec
// =============================================================

#[test]
fn empty_spec_is_default_record() {
    assert_eq!(parse_record_spec("", 0).unwrap(), CveModel::default());
    assert_eq!(parse_record_spec("default", 0).unwrap(), CveModel::default());
}

#[test]
fn spec_overrides_named_attributes() {
    let record = parse_record_spec("attackVector=local, scope=CHANGED,integrityImpact=high", 0).unwrap();
    assert_eq!(record.attack_vector, AttackVector::Local);
    assert_eq!(record.scope, Scope::Changed);
    assert_eq!(record.integrity_impact, Impact::High);
    assert_eq!(record.availability_impact, Impact::None);
}

#[test]
fn spec_without_equals_is_rejected() {
    assert!(matches!(parse_record_spec("attackVector", 0), Err(CliError::InvalidRecordSpec(_))));
}

#[test]
fn spec_with_unknown_attribute_is_rejected() {
    let err = parse_record_spec("vector=LOCAL", 0).unwrap_err();
    assert!(matches!(err, CliError::UnknownAttribute(ref key) if key == "vector"));
}

#[test]
fn spec_with_out_of_domain_value_is_rejected() {
    let err = parse_record_spec("scope=SIDEWAYS", 2).unwrap_err();
    assert_eq!(err.to_string(), "invalid record #2: `SIDEWAYS` is not a valid value for `scope`");
}

// =============================================================
// parse_batch_json
// =============================================================

#[test]
fn batch_json_accepts_array_and_data_object() {
    let record = serde_json::to_string(&CveModel::default()).unwrap();
    let array = format!("[{record},{record}]");
    let wrapped = format!("{{\"data\":[{record}]}}");
    assert_eq!(parse_batch_json(&array).unwrap().len(), 2);
    assert_eq!(parse_batch_json(&wrapped).unwrap(), vec![CveModel::default()]);
}

#[test]
fn batch_json_reports_index_of_invalid_record() {
    let text = r#"[
        {"attackComplexity":"LOW","attackVector":"NETWORK","availabilityImpact":"NONE",
         "confidentialityImpact":"NONE","integrityImpact":"NONE","privilegesRequired":"NONE",
         "scope":"UNCHANGED","userInteraction":"NONE"},
        {"attackComplexity":"LOW"}
    ]"#;
    let err = parse_batch_json(text).unwrap_err();
    assert!(matches!(err, CliError::InvalidRecord { index: 1, .. }));
}

#[test]
fn batch_json_rejects_other_shapes() {
    assert!(matches!(parse_batch_json("42"), Err(CliError::InvalidBatchShape)));
    assert!(matches!(parse_batch_json("{\"records\":[]}"), Err(CliError::InvalidBatchShape)));
    assert!(matches!(parse_batch_json("[1]"), Err(CliError::InvalidBatchShape)));
    assert!(matches!(parse_batch_json("not json"), Err(CliError::InvalidJson(_))));
}

// =============================================================
// build_batch
// =============================================================

fn predict_args(records: &[&str]) -> PredictArgs {
    PredictArgs { records: records.iter().map(|s| (*s).to_owned()).collect(), file: None, json: false }
}

#[test]
fn batch_without_input_is_one_default_record() {
    assert_eq!(build_batch(&predict_args(&[])).unwrap(), vec![CveModel::default()]);
}

#[test]
fn batch_keeps_record_order() {
    let batch = build_batch(&predict_args(&["attackVector=LOCAL", "default", "scope=CHANGED"])).unwrap();
    assert_eq!(batch.len(), MAX_RECORDS);
    assert_eq!(batch[0].attack_vector, AttackVector::Local);
    assert_eq!(batch[1], CveModel::default());
    assert_eq!(batch[2].scope, Scope::Changed);
}

#[test]
fn batch_over_limit_is_rejected_before_posting() {
    let err = build_batch(&predict_args(&["default"; 5])).unwrap_err();
    assert!(matches!(err, CliError::TooManyRecords { count: 5 }));
    assert_eq!(err.to_string(), "batch holds 5 records; at most 3 can be predicted at once");
}

#[test]
fn batch_record_errors_carry_their_position() {
    let err = build_batch(&predict_args(&["default", "scope=SIDEWAYS"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidRecord { index: 1, .. }));
}

// =============================================================
// check_alignment
// =============================================================

#[test]
fn aligned_predictions_pass_through() {
    let batch = vec![CveModel::default(); 2];
    let predictions = vec![
        CvePrediction { label: ExploitLabel::NoExploit, score: 0.1, input_model: CveModel::default() },
        CvePrediction { label: ExploitLabel::Exploit, score: 0.9, input_model: CveModel::default() },
    ];
    let checked = check_alignment(&batch, predictions.clone()).unwrap();
    assert_eq!(checked, predictions);
}

#[test]
fn misaligned_predictions_are_rejected() {
    let batch = vec![CveModel::default(); 2];
    let err = check_alignment(&batch, Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Misaligned { sent: 2, received: 0 }));
}

// =============================================================
// render_attributes
// =============================================================

#[test]
fn attributes_listing_has_one_line_per_attribute() {
    let listing = render_attributes();
    assert_eq!(listing.lines().count(), 8);
    assert!(listing.contains("NETWORK | ADJACENT_NETWORK | LOCAL | PHYSICAL"));
    assert!(listing.lines().next().unwrap().starts_with("attackComplexity"));
}
