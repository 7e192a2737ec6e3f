use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("field `{0}` has no declared value domain")]
    UnknownField(String),

    #[error("no lead with id `{0}`")]
    LeadNotFound(String),

    #[error("value `{value}` is not valid for field `{field}`")]
    InvalidFieldValue { field: String, value: String },
}
