use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown output table: {name}")]
    UnknownTable { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
