//! Grouping a flat record batch into per-case groups.

use pvn_types::CaseRecord;

use crate::normalize::Normalized;

/// All records sharing one regulatory identifier, in received order.
///
/// The first record is authoritative for single-valued case attributes;
/// the others contribute to the drug and history lists.
#[derive(Debug, Clone)]
pub struct CaseGroup {
    pub regulatory_id: String,
    pub records: Vec<CaseRecord>,
}

/// Partitions a batch by normalized regulatory identifier.
///
/// Group order follows the first occurrence of each identifier and row
/// order within a group is preserved. Records with no identifier group
/// under the `unknown` sentinel.
pub fn group_by_case(records: Vec<CaseRecord>) -> Vec<CaseGroup> {
    let mut groups: Vec<CaseGroup> = Vec::new();
    for record in records {
        let id = Normalized::from_raw(record.regulatory_id.as_ref())
            .or_unknown()
            .to_owned();
        match groups.iter_mut().find(|group| group.regulatory_id == id) {
            Some(group) => group.records.push(record),
            None => groups.push(CaseGroup {
                regulatory_id: id,
                records: vec![record],
            }),
        }
    }
    groups
}
