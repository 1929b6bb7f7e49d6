use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Registry is empty")]
    EmptyRegistry,

    #[error("Invalid argument: {name} must not be negative (got {value})")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("Invalid random range: {min} > {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Duplicate gun id: {0}")]
    DuplicateId(crate::core::types::GunId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FleetError>;
