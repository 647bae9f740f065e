#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("unknown race/ethnicity: {0}")]
    UnknownRace(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
