//! Input validation utilities.
//!
//! Structural checks applied to a record batch before narrative generation.
//! These only verify field presence; content problems degrade to sentinel
//! wording during composition instead.

use pvn_types::CaseRecord;
use serde_json::Value;

/// Fields every row must carry for a case to be processable.
const REQUIRED_FIELDS: &[(&str, fn(&CaseRecord) -> Option<&Value>)] = &[
    ("regulatory_ID", |record| record.regulatory_id.as_ref()),
    ("case_justification", |record| {
        record.case_justification.as_ref()
    }),
    ("case_type", |record| record.case_type.as_ref()),
];

/// Reports every missing required field across the batch.
///
/// Each finding reads `Row <n>: Missing required field '<field>'`, with
/// 1-based row numbers in input order. An empty result means the batch is
/// structurally valid.
pub fn validate_required_fields(records: &[CaseRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    for (index, record) in records.iter().enumerate() {
        for &(field, accessor) in REQUIRED_FIELDS {
            if !is_present(accessor(record)) {
                errors.push(format!(
                    "Row {}: Missing required field '{}'",
                    index + 1,
                    field
                ));
            }
        }
    }
    errors
}

fn is_present(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_rows_pass() {
        let records: Vec<CaseRecord> = vec![serde_json::from_value(json!({
            "regulatory_ID": "REG001",
            "case_justification": "medically confirmed",
            "case_type": "spontaneous"
        }))
        .unwrap()];
        assert!(validate_required_fields(&records).is_empty());
    }

    #[test]
    fn findings_carry_one_based_rows_and_field_names() {
        let records: Vec<CaseRecord> = vec![
            serde_json::from_value(json!({
                "regulatory_ID": "REG001",
                "case_justification": "medically confirmed",
                "case_type": "spontaneous"
            }))
            .unwrap(),
            serde_json::from_value(json!({
                "regulatory_ID": "  ",
                "case_type": "spontaneous"
            }))
            .unwrap(),
        ];
        let errors = validate_required_fields(&records);
        assert_eq!(
            errors,
            vec![
                "Row 2: Missing required field 'regulatory_ID'",
                "Row 2: Missing required field 'case_justification'",
            ]
        );
    }

    #[test]
    fn numeric_identifiers_count_as_present() {
        let records: Vec<CaseRecord> = vec![serde_json::from_value(json!({
            "regulatory_ID": 12345,
            "case_justification": "literature",
            "case_type": "study"
        }))
        .unwrap()];
        assert!(validate_required_fields(&records).is_empty());
    }
}
