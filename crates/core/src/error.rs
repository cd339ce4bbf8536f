#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("case group '{group_id}' contains a record for '{record_id}'")]
    MixedIdentifiers { group_id: String, record_id: String },
}

pub type NarrativeResult<T> = std::result::Result<T, NarrativeError>;
