//! Case narrative composition.
//!
//! Builds the three-paragraph narrative for one case group: the case
//! overview, the patient history, and the drug administration details.
//! Composition is pure; missing or malformed data degrades to sentinel
//! wording rather than failing.

use pvn_types::CaseRecord;
use serde_json::Value;

use crate::dates::format_report_date;
use crate::error::{NarrativeError, NarrativeResult};
use crate::grammar::join_with_and;
use crate::group::CaseGroup;
use crate::normalize::{Normalized, UNKNOWN};
use crate::patient::patient_description;

/// Output for a case group that arrives with no records at all.
pub const EMPTY_GROUP_NARRATIVE: &str = "No data provided for narrative generation.";

/// Patient-history categories, in report order. Labels are the plural form;
/// the singular is the label with trailing "s" stripped.
const HISTORY_CATEGORIES: &[(&str, fn(&CaseRecord) -> Option<&Value>)] = &[
    ("medical history", |record| record.medical_history.as_ref()),
    ("past drug therapy", |record| record.past_drug_therapy.as_ref()),
    ("concurrent conditions", |record| {
        record.concurrent_condition.as_ref()
    }),
    ("concomitant medications", |record| {
        record.concomitant_medication.as_ref()
    }),
];

/// Builds the full narrative for one case group.
///
/// The three paragraphs are always joined by a blank line, even when the
/// history paragraph is empty. The only error is a violated group
/// invariant: a record whose identifier differs from the group's.
pub fn synthesize(group: &CaseGroup) -> NarrativeResult<String> {
    let Some(first) = group.records.first() else {
        return Ok(EMPTY_GROUP_NARRATIVE.to_owned());
    };
    check_homogeneous(group)?;

    let overview = compose_overview(first, &group.records);
    let history = compose_history(&group.records);
    let administration = compose_administration(&group.records);

    Ok(format!("{overview}\n\n{history}\n\n{administration}"))
}

fn check_homogeneous(group: &CaseGroup) -> NarrativeResult<()> {
    for record in &group.records {
        let id = Normalized::from_raw(record.regulatory_id.as_ref());
        let id = id.or_unknown();
        if id != group.regulatory_id {
            return Err(NarrativeError::MixedIdentifiers {
                group_id: group.regulatory_id.clone(),
                record_id: id.to_owned(),
            });
        }
    }
    Ok(())
}

/// Paragraph 1: the case overview, drawn from the first record plus the
/// distinct suspect drugs across the whole group.
fn compose_overview(first: &CaseRecord, records: &[CaseRecord]) -> String {
    let case_justification = Normalized::from_raw(first.case_justification.as_ref());
    let case_type = Normalized::from_raw(first.case_type.as_ref());
    let regulatory_id = Normalized::from_raw(first.regulatory_id.as_ref());
    let title = Normalized::from_raw(first.publication_title.as_ref());
    let country = Normalized::from_raw(first.country.as_ref());
    let co_suspect = Normalized::from_raw(first.co_suspect_drug.as_ref());
    let event = Normalized::from_raw(first.event.as_ref());

    let reporter = Normalized::from_raw(first.reporter_type.as_ref())
        .or_unknown()
        .to_lowercase();
    let receipt_date = Normalized::from_raw(first.initial_receipt_date.as_ref())
        .known()
        .and_then(format_report_date)
        .unwrap_or_else(|| UNKNOWN.to_owned());

    let suspect_drugs = distinct_suspect_drugs(records);
    let drug_list = if suspect_drugs.is_empty() {
        "(no suspect drugs listed)".to_owned()
    } else {
        join_with_and(&suspect_drugs)
    };
    let manufacturer = if suspect_drugs.len() <= 1 {
        "(unknown manufacturer)"
    } else {
        "(unknown manufacturers)"
    };

    let patient = patient_description(
        &Normalized::from_raw(first.age.as_ref()),
        &Normalized::from_raw(first.gender.as_ref()),
    );

    format!(
        "This {case_justification} case was reported by a {reporter} with medical literature \
         \"{title}\", from {country}. This case was received by Alkem on {receipt_date} from \
         {case_type} with {regulatory_id}. It concerns {patient}, who was administered \
         {drug_list} {manufacturer}. The co-suspect drug was {co_suspect}. The patient \
         experienced {event}.",
        case_justification = case_justification.or_unknown(),
        title = title.or_unknown(),
        country = country.or_unknown(),
        case_type = case_type.or_unknown(),
        regulatory_id = regulatory_id.or_unknown(),
        co_suspect = co_suspect.or_unknown(),
        event = event.or_unknown(),
    )
}

/// Distinct suspect drug names across the group, first-mention order.
fn distinct_suspect_drugs(records: &[CaseRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if let Some(name) = Normalized::from_raw(record.suspect_drug.as_ref()).known() {
            if name != UNKNOWN && !names.iter().any(|seen| seen == name) {
                names.push(name.to_owned());
            }
        }
    }
    names
}

/// Paragraph 2: patient history across all records, one clause per category
/// with data, plus a closing sentence naming categories with none.
fn compose_history(records: &[CaseRecord]) -> String {
    let mut clauses: Vec<String> = Vec::new();
    let mut not_reported: Vec<&str> = Vec::new();

    for &(label, field) in HISTORY_CATEGORIES {
        let values: Vec<String> = records
            .iter()
            .filter_map(|record| Normalized::from_raw(field(record)).known().map(str::to_owned))
            .filter(|value| value.as_str() != UNKNOWN)
            .collect();
        if values.is_empty() {
            not_reported.push(label);
        } else {
            let clause_label = if values.len() == 1 {
                label.trim_end_matches('s')
            } else {
                label
            };
            clauses.push(format!("{clause_label} included {}", join_with_and(&values)));
        }
    }

    let mut paragraph = if clauses.is_empty() {
        String::new()
    } else {
        format!("The patient's {}.", clauses.join(". "))
    };
    if !not_reported.is_empty() {
        let missing = format!("The {} were not reported.", join_with_and(&not_reported));
        paragraph = format!("{paragraph} {missing}").trim().to_owned();
    }
    paragraph
}

/// Paragraph 3: one administration sentence per record, in received order,
/// closed by the batch-and-expiration sentence (singular for one record,
/// plural otherwise).
fn compose_administration(records: &[CaseRecord]) -> String {
    let mut sentences: Vec<String> = Vec::with_capacity(records.len() + 1);
    for record in records {
        let start_date = Normalized::from_raw(record.suspect_drug_start_date.as_ref())
            .known()
            .and_then(format_report_date)
            .unwrap_or_else(|| "unknown date".to_owned());
        let drug = Normalized::from_raw(record.suspect_drug.as_ref());
        let dose = Normalized::from_raw(record.dose.as_ref());
        let frequency = Normalized::from_raw(record.frequency.as_ref());
        let route = Normalized::from_raw(record.route.as_ref());
        let indication = Normalized::from_raw(record.indication.as_ref());
        sentences.push(format!(
            "On {start_date}, the patient was administered {drug} at the dose of {dose}, \
             frequency {frequency}, via {route} for {indication}.",
            drug = drug.or_unknown(),
            dose = dose.or_unknown(),
            frequency = frequency.or_unknown(),
            route = route.or_unknown(),
            indication = indication.known_or("an unknown indication"),
        ));
    }

    if sentences.len() == 1 {
        sentences.push("The batch number and expiration date were not reported.".to_owned());
    } else if sentences.len() > 1 {
        sentences.push("The batch numbers and expiration dates were not reported.".to_owned());
    }
    sentences.join(" ")
}
